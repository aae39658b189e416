//! Mesh fixtures for tests and benches.

use glam::DVec3;

use crate::constants::Direction;
use crate::types::TriangleMesh;

/// Closed axis-aligned box with outward (counter-clockwise) winding.
pub fn box_mesh(center: DVec3, half: DVec3) -> TriangleMesh {
  let mut positions = Vec::with_capacity(24);
  let mut indices = Vec::with_capacity(12);
  for dir in Direction::ALL {
    let n = dir.as_dvec3();
    let u = if n.x != 0.0 { DVec3::Y } else { DVec3::X };
    let v = n.cross(u);
    let base = positions.len() as u32;
    for corner in [n - u - v, n + u - v, n + u + v, n - u + v] {
      positions.push(center + corner * half);
    }
    indices.push([base, base + 1, base + 2]);
    indices.push([base, base + 2, base + 3]);
  }
  TriangleMesh::new(positions, indices)
}

/// Axis-aligned cube of edge `size` centered at the origin.
pub fn cube_mesh(size: f64) -> TriangleMesh {
  box_mesh(DVec3::ZERO, DVec3::splat(size * 0.5))
}

/// Rectangle in the plane `z`, spanning `min..max` in XY, facing +Z.
pub fn quad_mesh(min: [f64; 2], max: [f64; 2], z: f64) -> TriangleMesh {
  TriangleMesh::new(
    vec![
      DVec3::new(min[0], min[1], z),
      DVec3::new(max[0], min[1], z),
      DVec3::new(max[0], max[1], z),
      DVec3::new(min[0], max[1], z),
    ],
    vec![[0, 1, 2], [0, 2, 3]],
  )
}

/// UV sphere with outward winding.
pub fn sphere_mesh(radius: f64, rings: u32, segments: u32) -> TriangleMesh {
  let mut positions = Vec::new();
  for r in 0..=rings {
    let phi = std::f64::consts::PI * r as f64 / rings as f64;
    for s in 0..=segments {
      let theta = std::f64::consts::TAU * s as f64 / segments as f64;
      positions.push(DVec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
      ));
    }
  }

  let stride = segments + 1;
  let mut indices = Vec::new();
  for r in 0..rings {
    for s in 0..segments {
      let a = r * stride + s;
      let b = a + stride;
      indices.push([a, a + 1, b]);
      indices.push([a + 1, b + 1, b]);
    }
  }
  TriangleMesh::new(positions, indices)
}
