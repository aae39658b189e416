//! Constants shared by the voxelizer, remesher and blueprint writer.
//!
//! # Grid content
//!
//! Every cell of a [`VoxelGrid`](crate::grid::VoxelGrid) holds an `i32`:
//! - `NO_CONTENT` (`i32::MAX`) = empty cell
//! - `0` = full cube
//! - `1..=12` = slope shape index into the [`ShapeCatalog`](crate::shapes::ShapeCatalog)
//! - negative values are reserved for shape lists and are never produced
//!
//! # Coordinate system
//!
//! Right-handed, +Y up, forward is -Z.

use glam::{DVec3, IVec3};

/// Empty cell marker.
pub const NO_CONTENT: i32 = i32::MAX;

/// Content value of a full cube cell.
pub const CUBE: i32 = 0;

/// Grid spacing of the game's placement lattice, in world units.
///
/// Blueprint positions are expressed as multiples of this unit.
pub const FINE_LATTICE_UNIT: f64 = 0.25;

/// Edge length of a large block, in world units.
pub const LARGE_BLOCK_SIZE: f64 = 2.5;

/// Edge length of a mid block, in world units.
pub const MID_BLOCK_SIZE: f64 = 0.5;

/// Distance (fraction of a block) triangles are pushed against their normal
/// before rasterization. Faces lying exactly on a cell boundary land in the
/// cell behind them instead of both neighbours.
pub const SURFACE_BIAS: f64 = 1.0e-3;

/// Amount (fraction of a block) cell boxes are shrunk by for the narrow phase.
/// Zero-area contact with a cell does not mark it. Must stay below
/// [`SURFACE_BIAS`].
pub const CONTACT_TOLERANCE: f64 = 1.0e-4;

/// Triangles rasterized between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL: usize = 256;

/// Model size (twice the largest absolute coordinate) above which conversion
/// is expected to be slow.
pub const MODEL_SIZE_SLOW: f64 = 500.0;

/// Model size above which conversion is unlikely to finish in reasonable time.
pub const MODEL_SIZE_TOO_LARGE: f64 = 3000.0;

/// Default upper bound for the grid dimension `N`.
pub const DEFAULT_MAX_CELLS_PER_AXIS: usize = 512;

/// One of the six axis directions.
///
/// The discriminant is the direction id written to blueprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
  Forward = 0,
  Backward = 1,
  Left = 2,
  Right = 3,
  Up = 4,
  Down = 5,
}

/// Unit vectors indexed by [`Direction::index`].
pub const DIRECTION_VECTORS: [IVec3; 6] = [
  IVec3::new(0, 0, -1), // Forward
  IVec3::new(0, 0, 1),  // Backward
  IVec3::new(-1, 0, 0), // Left
  IVec3::new(1, 0, 0),  // Right
  IVec3::new(0, 1, 0),  // Up
  IVec3::new(0, -1, 0), // Down
];

impl Direction {
  /// All directions in id order.
  pub const ALL: [Direction; 6] = [
    Direction::Forward,
    Direction::Backward,
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
  ];

  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  #[inline]
  pub const fn vector(self) -> IVec3 {
    DIRECTION_VECTORS[self as usize]
  }

  #[inline]
  pub fn as_dvec3(self) -> DVec3 {
    self.vector().as_dvec3()
  }

  /// The opposite direction.
  #[inline]
  pub const fn invert(self) -> Direction {
    match self {
      Direction::Forward => Direction::Backward,
      Direction::Backward => Direction::Forward,
      Direction::Left => Direction::Right,
      Direction::Right => Direction::Left,
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
    }
  }

  /// True when both directions lie on the same axis.
  #[inline]
  pub const fn is_parallel(self, other: Direction) -> bool {
    (self as u8) / 2 == (other as u8) / 2
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
