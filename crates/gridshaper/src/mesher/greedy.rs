//! Greedy boundary extraction for a boolean occupancy volume.
//!
//! For each axis and facing, every slice builds a 2D mask of exposed faces
//! (occupied cell, unoccupied or out-of-range neighbour) and merges it into
//! maximal rectangles: extend a run along U, then grow it along V while every
//! cell of the next row matches. One quad per rectangle.
//!
//! Output is in a unit-cube-centered frame: cell `c` spans `c ± 0.5`.

use glam::DVec3;

use crate::types::SurfaceMesh;

/// Occupancy volume with the same `x + N * (y + N * z)` layout as
/// [`VoxelGrid`](crate::grid::VoxelGrid).
pub struct Occupancy<'a> {
  pub cells: &'a [bool],
  pub dim: usize,
}

impl Occupancy<'_> {
  #[inline]
  fn get(&self, p: [i64; 3]) -> bool {
    let n = self.dim as i64;
    if p.iter().any(|&v| v < 0 || v >= n) {
      return false;
    }
    self.cells[(p[0] + n * (p[1] + n * p[2])) as usize]
  }
}

/// Extract the exposed faces of all occupied cells as merged quads.
pub fn extract_boundary(occupancy: &Occupancy) -> SurfaceMesh {
  let dim = occupancy.dim;
  let mut mesh = SurfaceMesh::new();
  let mut mask = vec![false; dim * dim];

  for axis in 0..3 {
    let u_axis = (axis + 1) % 3;
    let v_axis = (axis + 2) % 3;

    for sign in [1i64, -1] {
      for d in 0..dim {
        // Build mask for this slice
        for j in 0..dim {
          for i in 0..dim {
            let mut p = [0i64; 3];
            p[axis] = d as i64;
            p[u_axis] = i as i64;
            p[v_axis] = j as i64;
            let mut q = p;
            q[axis] += sign;
            mask[j * dim + i] = occupancy.get(p) && !occupancy.get(q);
          }
        }

        // Greedy merge
        for j in 0..dim {
          let mut i = 0;
          while i < dim {
            if !mask[j * dim + i] {
              i += 1;
              continue;
            }

            let mut w = 1;
            while i + w < dim && mask[j * dim + i + w] {
              w += 1;
            }

            let mut h = 1;
            'grow: while j + h < dim {
              for k in 0..w {
                if !mask[(j + h) * dim + i + k] {
                  break 'grow;
                }
              }
              h += 1;
            }

            for dj in 0..h {
              for di in 0..w {
                mask[(j + dj) * dim + i + di] = false;
              }
            }

            emit_quad(&mut mesh, axis, sign, d, [i, j], [w, h]);
            i += w;
          }
        }
      }
    }
  }

  mesh
}

fn emit_quad(
  mesh: &mut SurfaceMesh,
  axis: usize,
  sign: i64,
  slice: usize,
  start: [usize; 2],
  size: [usize; 2],
) {
  let u_axis = (axis + 1) % 3;
  let v_axis = (axis + 2) % 3;

  let plane = slice as f64 + 0.5 * sign as f64;
  let u0 = start[0] as f64 - 0.5;
  let v0 = start[1] as f64 - 0.5;
  let u1 = u0 + size[0] as f64;
  let v1 = v0 + size[1] as f64;

  let corner = |u: f64, v: f64| {
    let mut p = DVec3::ZERO;
    p[axis] = plane;
    p[u_axis] = u;
    p[v_axis] = v;
    p
  };

  let mut normal = DVec3::ZERO;
  normal[axis] = sign as f64;

  // e_u × e_v = e_axis, so this order is counter-clockwise around +axis.
  let (a, b, c, d) = (corner(u0, v0), corner(u1, v0), corner(u1, v1), corner(u0, v1));
  if sign > 0 {
    mesh.push_quad([a, b, c, d], normal);
  } else {
    mesh.push_quad([a, d, c, b], normal);
  }
}

#[cfg(test)]
#[path = "greedy_test.rs"]
mod greedy_test;
