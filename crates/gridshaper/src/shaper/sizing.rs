//! Grid sizing: pick a power-of-two cube around the model.

use glam::DVec3;

use crate::bounds::Aabb;
use crate::constants::{MODEL_SIZE_SLOW, MODEL_SIZE_TOO_LARGE};
use crate::error::{BlueprintError, Result};
use crate::grid::GridIndexer;

/// Result of sizing a grid for a model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSizing {
  pub indexer: GridIndexer,
  /// Cells per axis.
  pub dim: usize,
  /// World-space box covered by the grid.
  pub bounds: Aabb,
}

/// Rough cost class of a model, from its size in world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelScale {
  Normal,
  /// Conversion works but may take a while.
  Slow,
  /// Conversion is unlikely to finish in reasonable time.
  TooLarge,
}

impl ModelScale {
  /// Classify by twice the largest absolute coordinate of `bounds`.
  pub fn assess(bounds: &Aabb) -> Self {
    let size = 2.0 * bounds.min.abs().max(bounds.max.abs()).max_element();
    if size > MODEL_SIZE_TOO_LARGE {
      ModelScale::TooLarge
    } else if size > MODEL_SIZE_SLOW {
      ModelScale::Slow
    } else {
      ModelScale::Normal
    }
  }
}

/// Size a grid of `cell_size` cells around `model_bounds`.
///
/// The bounds are grown by one cell on every side. Starting from a single
/// cell centered on the world origin, the covering cube doubles until it
/// contains the grown bounds; the grid origin is the cube's minimum corner.
pub fn size_grid(model_bounds: &Aabb, cell_size: f64, max_cells_per_axis: usize) -> Result<GridSizing> {
  if !model_bounds.is_finite() || model_bounds.is_empty() {
    return Err(BlueprintError::InvalidBounds);
  }

  #[cfg(feature = "tracing")]
  {
    let scale = ModelScale::assess(model_bounds);
    if scale != ModelScale::Normal {
      tracing::warn!(?scale, "model is large, conversion may be slow");
    }
  }

  let target = model_bounds.expanded(cell_size);
  let mut half = cell_size * 0.5;
  let mut cube = Aabb::from_center_half_extents(DVec3::ZERO, DVec3::splat(half));
  while !cube.contains(&target) {
    half *= 2.0;
    cube = Aabb::from_center_half_extents(DVec3::ZERO, DVec3::splat(half));
  }

  // Saturating float → int cast keeps absurd sizes above any limit.
  let dim = (cube.max_dim() / cell_size).ceil() as usize;
  if dim > max_cells_per_axis {
    return Err(BlueprintError::GridTooLarge {
      required: dim,
      limit: max_cells_per_axis,
    });
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(dim, origin = ?cube.min, cell_size, "sized grid");

  Ok(GridSizing {
    indexer: GridIndexer::new(cube.min, cell_size),
    dim,
    bounds: cube,
  })
}

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;
