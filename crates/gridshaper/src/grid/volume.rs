//! Dense cubic cell storage.
//!
//! # Memory Layout
//!
//! Flat array of `N³` cells, X fastest:
//! ```text
//! index = x + N * (y + N * z)
//! ```

use glam::IVec3;

use crate::constants::NO_CONTENT;

/// `N × N × N` grid of cell contents.
///
/// See [`constants`](crate::constants) for the content encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
  dim: usize,
  cells: Vec<i32>,
}

impl VoxelGrid {
  /// Grid of `dim³` empty cells.
  pub fn new(dim: usize) -> Self {
    Self {
      dim,
      cells: vec![NO_CONTENT; dim * dim * dim],
    }
  }

  /// Cells per axis.
  #[inline]
  pub fn dim(&self) -> usize {
    self.dim
  }

  /// Total cell count.
  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  #[inline]
  pub fn in_bounds(&self, cell: IVec3) -> bool {
    let n = self.dim as i64;
    let in_axis = |v: i32| (0..n).contains(&(v as i64));
    in_axis(cell.x) && in_axis(cell.y) && in_axis(cell.z)
  }

  /// Linear index of `cell`, `None` when out of range.
  #[inline]
  pub fn index_of(&self, cell: IVec3) -> Option<usize> {
    if !self.in_bounds(cell) {
      return None;
    }
    let n = self.dim;
    Some(cell.x as usize + n * (cell.y as usize + n * cell.z as usize))
  }

  /// Inverse of [`index_of`](Self::index_of).
  #[inline]
  pub fn coord_of(&self, index: usize) -> IVec3 {
    let n = self.dim;
    IVec3::new(
      (index % n) as i32,
      ((index / n) % n) as i32,
      (index / (n * n)) as i32,
    )
  }

  /// Content at `cell`; out-of-range cells read as `NO_CONTENT`.
  #[inline]
  pub fn get(&self, cell: IVec3) -> i32 {
    self.get_checked(cell).unwrap_or(NO_CONTENT)
  }

  /// Content at `cell`, `None` when out of range.
  #[inline]
  pub fn get_checked(&self, cell: IVec3) -> Option<i32> {
    self.index_of(cell).map(|i| self.cells[i])
  }

  /// Store `value` at `cell`. Returns false (and stores nothing) when out of
  /// range.
  #[inline]
  pub fn set(&mut self, cell: IVec3, value: i32) -> bool {
    match self.index_of(cell) {
      Some(i) => {
        self.cells[i] = value;
        true
      }
      None => false,
    }
  }

  /// Raw cells in linear order.
  #[inline]
  pub fn cells(&self) -> &[i32] {
    &self.cells
  }

  /// `(cell, content)` pairs in linear order.
  pub fn iter(&self) -> impl Iterator<Item = (IVec3, i32)> + '_ {
    self
      .cells
      .iter()
      .enumerate()
      .map(move |(i, &c)| (self.coord_of(i), c))
  }

  /// Non-empty `(cell, content)` pairs in linear order.
  pub fn occupied(&self) -> impl Iterator<Item = (IVec3, i32)> + '_ {
    self.iter().filter(|&(_, c)| c != NO_CONTENT)
  }

  /// Number of cells holding exactly `content`.
  pub fn count(&self, content: i32) -> usize {
    self.cells.iter().filter(|&&c| c == content).count()
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
