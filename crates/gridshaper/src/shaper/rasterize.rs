//! Surface rasterization: mark every cell the mesh surface passes through.

use glam::IVec3;

use crate::cancel::CancelToken;
use crate::constants::{CANCEL_CHECK_INTERVAL, CONTACT_TOLERANCE, CUBE, SURFACE_BIAS};
use crate::error::Result;
use crate::geometry::{intersect_box_triangle, IntersectResult};
use crate::grid::{GridIndexer, VoxelGrid};
use crate::types::TriangleMesh;

/// Mark cells overlapped by the mesh surface as cubes.
///
/// Candidates are the cells whose closed box overlaps the triangle's bounding
/// box. A candidate is marked when the triangle, or its copy nudged inward by
/// `SURFACE_BIAS` cells along the outward normal, overlaps the cell box shrunk
/// by `CONTACT_TOLERANCE`. A triangle that hits no shrunk box (it lies within
/// the tolerance band of a face) marks the cell that fully contains it.
/// Returns the number of newly marked cells.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "shaper::rasterize"))]
pub fn rasterize(
  mesh: &TriangleMesh,
  indexer: &GridIndexer,
  grid: &mut VoxelGrid,
  cancel: &CancelToken,
) -> Result<usize> {
  let cell_size = indexer.cell_size;
  let bias = SURFACE_BIAS * cell_size;
  let tolerance = CONTACT_TOLERANCE * cell_size;
  let last = IVec3::splat(grid.dim() as i32 - 1);

  let mut marked = 0;
  for i in 0..mesh.triangle_count() {
    if i % CANCEL_CHECK_INTERVAL == 0 {
      cancel.check()?;
    }
    let Some(tri) = mesh.triangle(i) else {
      continue;
    };
    let biased = tri.translated(-mesh.outward_normal(i) * bias);

    let (lo, hi) = indexer.closed_cell_range(&tri.bounds());
    let lo = lo.max(IVec3::ZERO);
    let hi = hi.min(last);

    let mut covered = false;
    for z in lo.z..=hi.z {
      for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
          let cell = IVec3::new(x, y, z);
          let cell_box = indexer.cell_box(cell).shrunk(tolerance);
          if intersect_box_triangle(&cell_box, &tri).is_hit()
            || intersect_box_triangle(&cell_box, &biased).is_hit()
          {
            covered = true;
            marked += mark(grid, cell);
          }
        }
      }
    }

    if !covered {
      for z in lo.z..=hi.z {
        for y in lo.y..=hi.y {
          for x in lo.x..=hi.x {
            let cell = IVec3::new(x, y, z);
            let inside = intersect_box_triangle(&indexer.cell_box(cell), &tri);
            if inside == IntersectResult::TriangleInsideBox {
              marked += mark(grid, cell);
            }
          }
        }
      }
    }
  }
  cancel.check()?;

  #[cfg(feature = "tracing")]
  tracing::debug!(triangles = mesh.triangle_count(), marked, "rasterized surface");

  Ok(marked)
}

/// Set `cell` to cube; 1 if it was not one already.
#[inline]
fn mark(grid: &mut VoxelGrid, cell: IVec3) -> usize {
  if grid.get(cell) == CUBE {
    return 0;
  }
  grid.set(cell, CUBE);
  1
}

#[cfg(test)]
#[path = "rasterize_test.rs"]
mod rasterize_test;
