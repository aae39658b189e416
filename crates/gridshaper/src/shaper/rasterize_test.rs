use glam::DVec3;

use super::*;
use crate::error::BlueprintError;
use crate::test_utils::{cube_mesh, quad_mesh};
use crate::types::MeshBounds;

fn unit_grid() -> (GridIndexer, VoxelGrid) {
  (GridIndexer::new(DVec3::ZERO, 1.0), VoxelGrid::new(4))
}

fn cubes(grid: &VoxelGrid) -> Vec<IVec3> {
  grid.occupied().map(|(cell, _)| cell).collect()
}

fn flipped(mut mesh: TriangleMesh) -> TriangleMesh {
  for t in &mut mesh.indices {
    t.swap(1, 2);
  }
  mesh
}

#[test]
fn test_triangle_inside_single_cell() {
  let (indexer, mut grid) = unit_grid();
  let mesh = quad_mesh([1.2, 1.2], [1.8, 1.8], 1.5);
  let marked = rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(marked, 1);
  assert_eq!(cubes(&grid), vec![IVec3::ONE]);
}

#[test]
fn test_face_on_cell_boundary_lands_behind_it() {
  // Facing +Z on the z = 2 boundary: the solid side is below.
  let (indexer, mut grid) = unit_grid();
  let mesh = quad_mesh([1.2, 1.2], [1.8, 1.8], 2.0);
  rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(cubes(&grid), vec![IVec3::new(1, 1, 1)]);

  // Same quad wound the other way: the solid side is above.
  let (indexer, mut grid) = unit_grid();
  let mesh = flipped(quad_mesh([1.2, 1.2], [1.8, 1.8], 2.0));
  rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(cubes(&grid), vec![IVec3::new(1, 1, 2)]);
}

#[test]
fn test_triangle_near_cell_face_stays_in_its_cell() {
  // Inside and outside the bias band of the z = 2 face, inside and outside
  // the contact tolerance, both windings.
  for z in [1.9995_f64, 1.99995, 2.00005, 2.0005, 1.99, 2.01] {
    let expected = vec![IVec3::new(1, 1, z.floor() as i32)];
    for mesh in [
      quad_mesh([1.2, 1.2], [1.8, 1.8], z),
      flipped(quad_mesh([1.2, 1.2], [1.8, 1.8], z)),
    ] {
      let (indexer, mut grid) = unit_grid();
      let marked = rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
      assert_eq!(cubes(&grid), expected, "quad at z = {z}");
      assert_eq!(marked, 1);
    }
  }
}

#[test]
fn test_cells_outside_triangle_bounds_untouched() {
  let (indexer, mut grid) = unit_grid();
  // Facing +Z just above z = 1: the inward nudge crosses into z = 0 cells.
  let mesh = quad_mesh([0.3, 1.1], [2.7, 1.9], 1.0005);
  rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();

  let bounds = mesh.mesh_bounds().unwrap();
  for cell in cubes(&grid) {
    assert!(indexer.cell_box(cell).overlaps(&bounds), "{cell} outside triangle bounds");
  }
  assert_eq!(grid.count(CUBE), 3);
}

#[test]
fn test_quad_spanning_cells() {
  let (indexer, mut grid) = unit_grid();
  let mesh = quad_mesh([0.5, 0.5], [2.5, 2.5], 1.5);
  let marked = rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(marked, 9);
  for (cell, _) in grid.occupied() {
    assert_eq!(cell.z, 1);
    assert!(cell.x <= 2 && cell.y <= 2);
  }
}

#[test]
fn test_corner_contact_does_not_mark() {
  // Quad touching cell (2, 2, 1) only at its corner column x = y = 2.
  let (indexer, mut grid) = unit_grid();
  let mesh = quad_mesh([1.2, 1.2], [2.0, 2.0], 1.5);
  rasterize(&mesh, &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(cubes(&grid), vec![IVec3::new(1, 1, 1)]);
}

#[test]
fn test_closed_cube_fills_octants() {
  let indexer = GridIndexer::new(DVec3::splat(-5.0), 2.5);
  let mut grid = VoxelGrid::new(4);
  let marked = rasterize(&cube_mesh(5.0), &indexer, &mut grid, &CancelToken::new()).unwrap();
  assert_eq!(marked, 8);
  for (cell, content) in grid.occupied() {
    assert_eq!(content, CUBE);
    assert!(cell.cmpge(IVec3::ONE).all() && cell.cmple(IVec3::splat(2)).all());
  }
}

#[test]
fn test_cancelled_before_start() {
  let (indexer, mut grid) = unit_grid();
  let cancel = CancelToken::new();
  cancel.cancel();
  let result = rasterize(&quad_mesh([0.5, 0.5], [2.5, 2.5], 1.5), &indexer, &mut grid, &cancel);
  assert!(matches!(result, Err(BlueprintError::Cancelled)));
}
