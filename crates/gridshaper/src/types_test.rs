use super::*;

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
  Triangle::new(DVec3::from(a), DVec3::from(b), DVec3::from(c))
}

#[test]
fn test_triangle_normal_follows_winding() {
  let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
  assert!(t.normal().z > 0.0);

  let flipped = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
  assert!(flipped.normal().z < 0.0);
}

#[test]
fn test_triangle_bounds() {
  let t = tri([1.0, -1.0, 0.0], [-2.0, 0.5, 3.0], [0.0, 2.0, -1.0]);
  let b = t.bounds();
  assert_eq!(b.min, DVec3::new(-2.0, -1.0, -1.0));
  assert_eq!(b.max, DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_mesh_skips_bad_indices() {
  let mesh = TriangleMesh::new(
    vec![DVec3::ZERO, DVec3::X, DVec3::Y],
    vec![[0, 1, 2], [0, 1, 7]],
  );
  assert_eq!(mesh.triangle_count(), 2);
  assert_eq!(mesh.triangles().count(), 1);
  assert!(mesh.triangle(1).is_none());
}

#[test]
fn test_mesh_bounds_empty_mesh_fails() {
  let mesh = TriangleMesh::default();
  assert!(matches!(mesh.mesh_bounds(), Err(BlueprintError::EmptyMesh)));

  let mesh = TriangleMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
  let bounds = mesh.mesh_bounds().unwrap();
  assert_eq!(bounds.min, DVec3::ZERO);
  assert_eq!(bounds.max, DVec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_outward_normal_uses_normal_hint() {
  let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
  let mesh = TriangleMesh::new(positions.clone(), vec![[0, 1, 2]]);
  assert_eq!(mesh.outward_normal(0), DVec3::Z);

  let hinted = mesh.clone().with_normals(vec![DVec3::NEG_Z; 3]);
  assert_eq!(hinted.outward_normal(0), DVec3::NEG_Z);

  // Mismatched normal count is ignored
  let bad = mesh.with_normals(vec![DVec3::NEG_Z]);
  assert_eq!(bad.outward_normal(0), DVec3::Z);

  let degenerate = TriangleMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0], vec![[0, 1, 2]]);
  assert_eq!(degenerate.outward_normal(0), DVec3::ZERO);
}

#[test]
fn test_push_polygon_orients_to_normal() {
  let mut mesh = SurfaceMesh::new();
  // Corners wound clockwise around +Z
  let corners = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
  ];
  mesh.push_polygon(&corners, DVec3::Z);
  assert_eq!(mesh.triangle_count(), 2);

  for t in mesh.indices.chunks(3) {
    let a = mesh.vertices[t[0] as usize].position_dvec3();
    let b = mesh.vertices[t[1] as usize].position_dvec3();
    let c = mesh.vertices[t[2] as usize].position_dvec3();
    assert!((b - a).cross(c - b).z > 0.0);
  }
}

#[test]
fn test_append_transformed_offsets_indices() {
  let mut quad = SurfaceMesh::new();
  quad.push_quad(
    [
      DVec3::new(-0.5, -0.5, 0.0),
      DVec3::new(0.5, -0.5, 0.0),
      DVec3::new(0.5, 0.5, 0.0),
      DVec3::new(-0.5, 0.5, 0.0),
    ],
    DVec3::Z,
  );

  let mut out = SurfaceMesh::new();
  out.append(&quad);
  out.append_transformed(&quad, DMat3::IDENTITY, 2.0, DVec3::new(10.0, 0.0, 0.0));

  assert_eq!(out.vertices.len(), 8);
  assert_eq!(out.triangle_count(), 4);
  assert_eq!(&out.indices[6..], &[4, 5, 6, 4, 6, 7]);
  assert_eq!(out.vertices[4].position, [9.0, -1.0, 0.0]);

  let bounds = out.bounds();
  assert_eq!(bounds.min, DVec3::new(-0.5, -1.0, 0.0));
  assert_eq!(bounds.max, DVec3::new(11.0, 1.0, 0.0));
}
