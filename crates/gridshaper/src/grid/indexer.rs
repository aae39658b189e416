//! World ↔ cell coordinate conversion for a uniform grid.

use glam::{DVec3, IVec3};

use crate::bounds::Aabb;

/// Maps world positions to integer cells of a uniform grid.
///
/// Cell `c` covers `[origin + c * cell_size, origin + (c + 1) * cell_size]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridIndexer {
  pub origin: DVec3,
  pub cell_size: f64,
}

impl GridIndexer {
  pub fn new(origin: DVec3, cell_size: f64) -> Self {
    debug_assert!(cell_size > 0.0, "cell size must be positive");
    Self { origin, cell_size }
  }

  /// Cell containing `point` (floor semantics; boundaries belong to the upper
  /// cell).
  #[inline]
  pub fn to_grid(&self, point: DVec3) -> IVec3 {
    ((point - self.origin) / self.cell_size).floor().as_ivec3()
  }

  /// Minimum corner of `cell`.
  #[inline]
  pub fn from_grid(&self, cell: IVec3) -> DVec3 {
    self.origin + cell.as_dvec3() * self.cell_size
  }

  #[inline]
  pub fn cell_box(&self, cell: IVec3) -> Aabb {
    Aabb {
      min: self.from_grid(cell),
      max: self.from_grid(cell + IVec3::ONE),
    }
  }

  #[inline]
  pub fn cell_center(&self, cell: IVec3) -> DVec3 {
    self.cell_box(cell).center()
  }

  /// Inclusive range of cells touched by `aabb`.
  #[inline]
  pub fn cell_range(&self, aabb: &Aabb) -> (IVec3, IVec3) {
    (self.to_grid(aabb.min), self.to_grid(aabb.max))
  }

  /// Inclusive range of cells whose closed box overlaps `aabb`.
  ///
  /// Unlike [`cell_range`](Self::cell_range), a box starting exactly on a cell
  /// boundary also includes the cell below it.
  #[inline]
  pub fn closed_cell_range(&self, aabb: &Aabb) -> (IVec3, IVec3) {
    let lo = ((aabb.min - self.origin) / self.cell_size).ceil().as_ivec3() - IVec3::ONE;
    (lo, self.to_grid(aabb.max))
  }
}

#[cfg(test)]
#[path = "indexer_test.rs"]
mod indexer_test;
