//! Core mesh types: the triangle soup fed to the voxelizer and the indexed
//! surface produced by the remesher.

use glam::{DMat3, DVec3};

use crate::bounds::Aabb;
use crate::error::{BlueprintError, Result};

// =============================================================================
// Input geometry
// =============================================================================

/// A single triangle in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub v0: DVec3,
  pub v1: DVec3,
  pub v2: DVec3,
}

impl Triangle {
  pub const fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
    Self { v0, v1, v2 }
  }

  #[inline]
  pub fn vertices(&self) -> [DVec3; 3] {
    [self.v0, self.v1, self.v2]
  }

  /// Tight bounding box.
  #[inline]
  pub fn bounds(&self) -> Aabb {
    Aabb {
      min: self.v0.min(self.v1).min(self.v2),
      max: self.v0.max(self.v1).max(self.v2),
    }
  }

  /// Unnormalized face normal from the winding order (counter-clockwise = front).
  #[inline]
  pub fn normal(&self) -> DVec3 {
    (self.v1 - self.v0).cross(self.v2 - self.v1)
  }

  #[inline]
  pub fn translated(&self, offset: DVec3) -> Triangle {
    Triangle::new(self.v0 + offset, self.v1 + offset, self.v2 + offset)
  }
}

/// Model-space bounding volume query used to size the voxel grid.
pub trait MeshBounds {
  /// Bounds of the whole model.
  ///
  /// Fails with [`BlueprintError::EmptyMesh`] when there is nothing to bound.
  fn mesh_bounds(&self) -> Result<Aabb>;
}

/// Imported triangle mesh.
///
/// Positions and optional per-vertex normals are parallel arrays; every index
/// triple forms one triangle. Triangles referencing missing vertices are
/// skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
  pub positions: Vec<DVec3>,
  pub normals: Option<Vec<DVec3>>,
  pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
  pub fn new(positions: Vec<DVec3>, indices: Vec<[u32; 3]>) -> Self {
    Self {
      positions,
      normals: None,
      indices,
    }
  }

  /// Attach per-vertex normals (ignored unless the count matches positions).
  pub fn with_normals(mut self, normals: Vec<DVec3>) -> Self {
    self.normals = Some(normals);
    self
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// Triangle `i`, or `None` if it references a missing vertex.
  pub fn triangle(&self, i: usize) -> Option<Triangle> {
    let [a, b, c] = *self.indices.get(i)?;
    Some(Triangle::new(
      *self.positions.get(a as usize)?,
      *self.positions.get(b as usize)?,
      *self.positions.get(c as usize)?,
    ))
  }

  /// All well-formed triangles in index order.
  pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
    (0..self.indices.len()).filter_map(move |i| self.triangle(i))
  }

  /// Averaged imported normal of triangle `i`, if normals were provided.
  pub fn vertex_normal_hint(&self, i: usize) -> Option<DVec3> {
    let normals = self.normals.as_ref()?;
    if normals.len() != self.positions.len() {
      return None;
    }
    let [a, b, c] = *self.indices.get(i)?;
    Some(*normals.get(a as usize)? + *normals.get(b as usize)? + *normals.get(c as usize)?)
  }

  /// Unit outward direction of triangle `i`.
  ///
  /// Uses the winding normal, flipped when imported normals disagree with it.
  /// Degenerate triangles return zero.
  pub fn outward_normal(&self, i: usize) -> DVec3 {
    let Some(tri) = self.triangle(i) else {
      return DVec3::ZERO;
    };
    let normal = tri.normal().normalize_or_zero();
    match self.vertex_normal_hint(i) {
      Some(hint) if hint.dot(normal) < 0.0 => -normal,
      _ => normal,
    }
  }
}

impl MeshBounds for TriangleMesh {
  fn mesh_bounds(&self) -> Result<Aabb> {
    let bounds = Aabb::from_points(self.triangles().flat_map(|t| t.vertices()));
    if bounds.is_empty() {
      return Err(BlueprintError::EmptyMesh);
    }
    Ok(bounds)
  }
}

impl MeshBounds for Aabb {
  fn mesh_bounds(&self) -> Result<Aabb> {
    if self.is_empty() {
      return Err(BlueprintError::EmptyMesh);
    }
    Ok(*self)
  }
}

// =============================================================================
// Output geometry
// =============================================================================

/// Output vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// World-space position.
  pub position: [f32; 3],

  /// Surface normal (unit vector).
  pub normal: [f32; 3],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
    }
  }
}

impl Vertex {
  #[inline]
  pub fn new(position: DVec3, normal: DVec3) -> Self {
    Self {
      position: position.as_vec3().to_array(),
      normal: normal.as_vec3().to_array(),
    }
  }

  #[inline]
  pub fn position_dvec3(&self) -> DVec3 {
    DVec3::from_array(self.position.map(f64::from))
  }

  #[inline]
  pub fn normal_dvec3(&self) -> DVec3 {
    DVec3::from_array(self.normal.map(f64::from))
  }
}

/// Indexed triangle surface. Vertices are not shared between faces so every
/// face keeps a flat normal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,
}

impl SurfaceMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Bounding box of all vertices (`Aabb::empty()` for an empty mesh).
  pub fn bounds(&self) -> Aabb {
    Aabb::from_points(self.vertices.iter().map(Vertex::position_dvec3))
  }

  /// Append a quad whose corners run counter-clockwise around `normal`.
  pub fn push_quad(&mut self, corners: [DVec3; 4], normal: DVec3) {
    let base = self.vertices.len() as u32;
    self
      .vertices
      .extend(corners.iter().map(|&c| Vertex::new(c, normal)));
    self
      .indices
      .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
  }

  /// Append a convex planar polygon as a triangle fan.
  ///
  /// The corner order is flipped if needed so the front face points along
  /// `normal`.
  pub fn push_polygon(&mut self, corners: &[DVec3], normal: DVec3) {
    if corners.len() < 3 {
      return;
    }
    let winding = (corners[1] - corners[0]).cross(corners[2] - corners[1]);
    let flip = winding.dot(normal) < 0.0;
    let unit = normal.normalize_or_zero();

    let start = self.vertices.len();
    self
      .vertices
      .extend(corners.iter().map(|&c| Vertex::new(c, unit)));
    if flip {
      self.vertices[start..].reverse();
    }
    let base = start as u32;
    for i in 1..corners.len() as u32 - 1 {
      self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
    }
  }

  /// Append another mesh unchanged.
  pub fn append(&mut self, other: &SurfaceMesh) {
    let base = self.vertices.len() as u32;
    self.vertices.extend_from_slice(&other.vertices);
    self.indices.extend(other.indices.iter().map(|i| i + base));
  }

  /// Append another mesh with positions mapped to `rotation * p * scale + translation`.
  ///
  /// `rotation` must be orthonormal; normals are rotated only.
  pub fn append_transformed(
    &mut self,
    other: &SurfaceMesh,
    rotation: DMat3,
    scale: f64,
    translation: DVec3,
  ) {
    let base = self.vertices.len() as u32;
    self.vertices.extend(other.vertices.iter().map(|v| {
      Vertex::new(
        rotation * v.position_dvec3() * scale + translation,
        rotation * v.normal_dvec3(),
      )
    }));
    self.indices.extend(other.indices.iter().map(|i| i + base));
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
