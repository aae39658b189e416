//! Shape catalog: the cube and the twelve oriented slopes a cell can hold.
//!
//! Content index `i` of a grid cell refers to `catalog.get(i)`. The order is
//! fixed and shared by the voxelizer, remesher and writer:
//!
//! | Index | Group | Forward  | Up       |
//! |-------|-------|----------|----------|
//! | 0     | cube  | Forward  | Up       |
//! | 1-4   | upper | L, R, F, B | Up     |
//! | 5-8   | lower | L, R, F, B | Down   |
//! | 9     | side  | Forward  | Left     |
//! | 10    | side  | Left     | Backward |
//! | 11    | side  | Backward | Right    |
//! | 12    | side  | Right    | Forward  |
//!
//! Surfaces are stored in the canonical frame (forward = -Z, up = +Y) and
//! centered on the cell; the remesher rotates them with
//! [`orientation_frame`](crate::geometry::orientation_frame).

use std::ops::RangeInclusive;
use std::sync::{Arc, OnceLock};

use glam::DVec3;

use crate::config::{BlockSize, PrefabIds};
use crate::constants::Direction;
use crate::types::SurfaceMesh;

/// One placeable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDefinition {
  /// Cell-centered surface in the canonical frame.
  pub surface: SurfaceMesh,
  pub forward: Direction,
  pub up: Direction,
  /// Opaque token identifying the block type in blueprints.
  pub external_id: String,
}

/// Slope families, synthesized in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlopeGroup {
  Upper,
  Lower,
  Side,
}

impl SlopeGroup {
  pub const ALL: [SlopeGroup; 3] = [SlopeGroup::Upper, SlopeGroup::Lower, SlopeGroup::Side];

  /// Catalog indices belonging to the group.
  pub const fn indices(self) -> RangeInclusive<usize> {
    match self {
      SlopeGroup::Upper => 1..=4,
      SlopeGroup::Lower => 5..=8,
      SlopeGroup::Side => 9..=12,
    }
  }
}

/// `(forward, up)` of every catalog entry, by index.
pub const SHAPE_ORIENTATIONS: [(Direction, Direction); 13] = {
  use Direction::*;
  [
    (Forward, Up),
    // upper
    (Left, Up),
    (Right, Up),
    (Forward, Up),
    (Backward, Up),
    // lower
    (Left, Down),
    (Right, Down),
    (Forward, Down),
    (Backward, Down),
    // side
    (Forward, Left),
    (Left, Backward),
    (Backward, Right),
    (Right, Forward),
  ]
};

/// Immutable shape table for one block size.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeCatalog {
  block_size: BlockSize,
  shapes: Vec<ShapeDefinition>,
}

impl ShapeCatalog {
  /// Catalog with the built-in external ids.
  pub fn new(block_size: BlockSize) -> Self {
    Self::with_prefabs(block_size, PrefabIds::for_block_size(block_size))
  }

  pub fn with_prefabs(block_size: BlockSize, prefabs: PrefabIds) -> Self {
    let half = block_size.edge_length() * 0.5;
    let cube = cube_surface(half);
    let slope = slope_surface(half);

    let shapes = SHAPE_ORIENTATIONS
      .iter()
      .enumerate()
      .map(|(i, &(forward, up))| {
        let (surface, external_id) = if i == 0 {
          (cube.clone(), prefabs.cube.clone())
        } else {
          (slope.clone(), prefabs.slope.clone())
        };
        ShapeDefinition {
          surface,
          forward,
          up,
          external_id,
        }
      })
      .collect();

    Self { block_size, shapes }
  }

  /// Process-wide catalog with built-in ids, built on first use.
  pub fn shared(block_size: BlockSize) -> Arc<ShapeCatalog> {
    static LARGE: OnceLock<Arc<ShapeCatalog>> = OnceLock::new();
    static MID: OnceLock<Arc<ShapeCatalog>> = OnceLock::new();

    let slot = match block_size {
      BlockSize::Large => &LARGE,
      BlockSize::Mid => &MID,
    };
    slot
      .get_or_init(|| Arc::new(ShapeCatalog::new(block_size)))
      .clone()
  }

  #[inline]
  pub fn block_size(&self) -> BlockSize {
    self.block_size
  }

  /// Shape for a cell content value.
  #[inline]
  pub fn get(&self, content: i32) -> Option<&ShapeDefinition> {
    usize::try_from(content).ok().and_then(|i| self.shapes.get(i))
  }

  pub fn len(&self) -> usize {
    self.shapes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.shapes.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &ShapeDefinition> {
    self.shapes.iter()
  }
}

// =============================================================================
// Canonical surfaces
// =============================================================================

/// Axis-aligned cube `[-half, half]³` with outward faces.
fn cube_surface(half: f64) -> SurfaceMesh {
  let mut mesh = SurfaceMesh::new();
  for dir in Direction::ALL {
    let n = dir.as_dvec3();
    let u = if n.x != 0.0 { DVec3::Y } else { DVec3::X };
    let v = n.cross(u);
    mesh.push_quad(
      [
        (n - u - v) * half,
        (n + u - v) * half,
        (n + u + v) * half,
        (n - u + v) * half,
      ],
      n,
    );
  }
  mesh
}

/// Wedge filling the forward (-Z) and down (-Y) half of the cell, cut by the
/// diagonal plane through the bottom-back and top-front edges.
fn slope_surface(h: f64) -> SurfaceMesh {
  let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z) * h;
  let mut mesh = SurfaceMesh::new();

  // Bottom
  mesh.push_polygon(
    &[p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)],
    DVec3::NEG_Y,
  );
  // Front
  mesh.push_polygon(
    &[p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, -1.0)],
    DVec3::NEG_Z,
  );
  // Slope
  mesh.push_polygon(
    &[p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, -1.0), p(-1.0, 1.0, -1.0)],
    DVec3::new(0.0, 1.0, 1.0),
  );
  // Sides
  mesh.push_polygon(&[p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, 1.0)], DVec3::X);
  mesh.push_polygon(&[p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, -1.0)], DVec3::NEG_X);

  mesh
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;
