//! gridshaper - Mesh to block blueprint conversion
//!
//! This crate voxelizes a triangle mesh onto a uniform grid of fixed-size
//! blocks, fills the stair-steps with wedge-shaped slope blocks, and writes
//! the result as a line-based blueprint that a block-building game can import.
//!
//! # Features
//!
//! - **Rasterization**: Exact triangle/box separating-axis test per cell
//! - **Slope Synthesis**: 12 wedge orientations in upper, lower and side
//!   groups, with an optional two-sided support rule
//! - **Remeshing**: Greedy-merged cube surface plus oriented slope instances
//!   for previewing a blueprint
//! - **Background Generation**: Cancellable generation on the rayon pool
//!
//! # Example
//!
//! ```ignore
//! use gridshaper::{BlueprintWriter, CancelToken, GeneratorSettings, GridShaper};
//!
//! let mesh = load_mesh_somehow();
//! let blueprint = GridShaper::new(&mesh).generate(&GeneratorSettings::default(), &CancelToken::new())?;
//!
//! println!("{} blocks", blueprint.stats().total);
//! BlueprintWriter::new("out").write(&blueprint, "ship")?;
//! ```

pub mod bounds;
pub mod cancel;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use bounds::Aabb;
pub use cancel::CancelToken;
pub use config::{BlockSize, GeneratorSettings, PrefabIds};
pub use constants::{Direction, CUBE, NO_CONTENT};
pub use error::{BlueprintError, Result};
pub use types::{MeshBounds, SurfaceMesh, Triangle, TriangleMesh, Vertex};

// Triangle/box overlap and orientation frames
pub mod geometry;
pub use geometry::{intersect_box_triangle, orientation_frame, IntersectResult};

// Grid addressing and storage
pub mod grid;
pub use grid::{GridIndexer, VoxelGrid};

// Block shape catalog
pub mod shapes;
pub use shapes::{ShapeCatalog, ShapeDefinition, SlopeGroup};

// Voxelizer
pub mod shaper;
pub use shaper::{Blueprint, BlueprintStats, GridShaper};

// Blueprint remeshing
pub mod mesher;
pub use mesher::GridMesher;

// Blueprint text output
pub mod writer;
pub use writer::{BlueprintWriter, Footprint};

// Off-thread generation
pub mod background;
pub use background::BackgroundGenerator;

// Mesh fixtures shared by tests and benches
#[doc(hidden)]
pub mod test_utils;
