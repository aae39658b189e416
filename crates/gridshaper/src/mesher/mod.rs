//! Remesher: rebuild a renderable surface from a [`Blueprint`].
//!
//! Cube cells go through greedy boundary extraction as one volume; every
//! slope cell gets a copy of its catalog surface, rotated into the cell's
//! orientation and moved to the cell center. The two parts are concatenated
//! without welding.

pub mod greedy;

use glam::DMat3;

use crate::constants::CUBE;
use crate::geometry::orientation_frame_dirs;
use crate::shaper::Blueprint;
use crate::types::SurfaceMesh;

pub use greedy::{extract_boundary, Occupancy};

/// Surface reconstruction for blueprints.
pub struct GridMesher;

impl GridMesher {
  /// Cube surface followed by slope instances, in world space.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesher::mesh"))]
  pub fn mesh(blueprint: &Blueprint) -> SurfaceMesh {
    let mut mesh = Self::cube_surface(blueprint);
    mesh.append(&Self::slope_surface(blueprint));

    #[cfg(feature = "tracing")]
    tracing::debug!(
      vertices = mesh.vertices.len(),
      triangles = mesh.triangle_count(),
      "remeshed blueprint"
    );

    mesh
  }

  /// Merged boundary of all cube cells.
  pub fn cube_surface(blueprint: &Blueprint) -> SurfaceMesh {
    let occupancy: Vec<bool> = blueprint.grid.cells().iter().map(|&c| c == CUBE).collect();
    let local = extract_boundary(&Occupancy {
      cells: &occupancy,
      dim: blueprint.grid.dim(),
    });

    // Local frame is cell-centered; shift by half a cell onto the corners.
    let cell_size = blueprint.indexer.cell_size;
    let mut mesh = SurfaceMesh::new();
    mesh.append_transformed(
      &local,
      DMat3::IDENTITY,
      cell_size,
      blueprint.indexer.origin + cell_size * 0.5,
    );
    mesh
  }

  /// One oriented catalog surface per slope cell.
  pub fn slope_surface(blueprint: &Blueprint) -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    for (cell, content) in blueprint.grid.occupied() {
      if content == CUBE {
        continue;
      }
      let Some(shape) = blueprint.catalog.get(content) else {
        continue;
      };
      mesh.append_transformed(
        &shape.surface,
        orientation_frame_dirs(shape.forward, shape.up),
        1.0,
        blueprint.indexer.cell_center(cell),
      );
    }
    mesh
  }
}
