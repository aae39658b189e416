//! Uniform grid addressing and dense cell storage.

pub mod indexer;
pub mod volume;

pub use indexer::GridIndexer;
pub use volume::VoxelGrid;
