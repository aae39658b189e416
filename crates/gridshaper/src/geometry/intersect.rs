//! Separating-axis triangle/box overlap test.
//!
//! # Algorithm
//!
//! 1. Fast accept when all three vertices lie inside the box
//! 2. Translate the triangle into box-local coordinates (box center at origin)
//! 3. Nine cross-product axes (each triangle edge × each box axis)
//! 4. Three box face normals (triangle AABB against box extents)
//! 5. Triangle plane against the box
//!
//! The first separating axis found reports no intersection. Touching
//! (zero-distance) contact counts as overlap. Degenerate triangles are not
//! special-cased: their cross-product axes collapse to zero and never
//! separate.

use glam::DVec3;

use crate::bounds::Aabb;
use crate::types::Triangle;

/// Outcome of a triangle/box test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectResult {
  NoIntersection,
  /// Triangle crosses or touches the box.
  Intersects,
  /// All three vertices are inside the box.
  TriangleInsideBox,
}

impl IntersectResult {
  #[inline]
  pub fn is_hit(self) -> bool {
    self != IntersectResult::NoIntersection
  }
}

/// Classify the overlap between an axis-aligned box and a triangle.
pub fn intersect_box_triangle(aabb: &Aabb, tri: &Triangle) -> IntersectResult {
  if aabb.contains_point(tri.v0) && aabb.contains_point(tri.v1) && aabb.contains_point(tri.v2) {
    return IntersectResult::TriangleInsideBox;
  }

  let center = aabb.center();
  let half = aabb.half_extents();
  let v0 = tri.v0 - center;
  let v1 = tri.v1 - center;
  let v2 = tri.v2 - center;

  let e0 = v1 - v0;
  let e1 = v2 - v1;
  let e2 = v0 - v2;

  for edge in [e0, e1, e2] {
    for box_axis in [DVec3::X, DVec3::Y, DVec3::Z] {
      if separated_on_axis(box_axis.cross(edge), v0, v1, v2, half) {
        return IntersectResult::NoIntersection;
      }
    }
  }

  for axis in 0..3 {
    let lo = v0[axis].min(v1[axis]).min(v2[axis]);
    let hi = v0[axis].max(v1[axis]).max(v2[axis]);
    if lo > half[axis] || hi < -half[axis] {
      return IntersectResult::NoIntersection;
    }
  }

  if !plane_box_overlap(e0.cross(e1), v0, half) {
    return IntersectResult::NoIntersection;
  }

  IntersectResult::Intersects
}

/// Boolean form of [`intersect_box_triangle`].
#[inline]
pub fn triangle_overlaps_box(aabb: &Aabb, tri: &Triangle) -> bool {
  intersect_box_triangle(aabb, tri).is_hit()
}

/// Project the triangle and the box onto `axis`; true when the intervals are
/// disjoint.
#[inline]
fn separated_on_axis(axis: DVec3, v0: DVec3, v1: DVec3, v2: DVec3, half: DVec3) -> bool {
  let p0 = v0.dot(axis);
  let p1 = v1.dot(axis);
  let p2 = v2.dot(axis);
  let radius = half.dot(axis.abs());
  p0.min(p1).min(p2) > radius || p0.max(p1).max(p2) < -radius
}

/// Plane through `vert` with `normal` against a box of `half` extents centered
/// at the origin.
#[inline]
fn plane_box_overlap(normal: DVec3, vert: DVec3, half: DVec3) -> bool {
  let mut vmin = DVec3::ZERO;
  let mut vmax = DVec3::ZERO;
  for q in 0..3 {
    if normal[q] > 0.0 {
      vmin[q] = -half[q] - vert[q];
      vmax[q] = half[q] - vert[q];
    } else {
      vmin[q] = half[q] - vert[q];
      vmax[q] = -half[q] - vert[q];
    }
  }
  if normal.dot(vmin) > 0.0 {
    return false;
  }
  normal.dot(vmax) >= 0.0
}

#[cfg(test)]
#[path = "intersect_test.rs"]
mod intersect_test;
