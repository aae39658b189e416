//! Axis-aligned bounding box with double precision.

use glam::DVec3;

/// Double-precision axis-aligned bounding box.
///
/// Used for mesh bounds, grid sizing and per-cell intersection tests.
/// Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Minimum corner (inclusive).
	pub min: DVec3,
	/// Maximum corner (inclusive).
	pub max: DVec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: DVec3, max: DVec3) -> Self {
		debug_assert!(
			min.cmple(max).all(),
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create a new AABB from center and half-extents.
	pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
		Self {
			min: center - half_extents,
			max: center + half_extents,
		}
	}

	/// Inverted box that any `encapsulate` call replaces.
	pub fn empty() -> Self {
		Self {
			min: DVec3::splat(f64::INFINITY),
			max: DVec3::splat(f64::NEG_INFINITY),
		}
	}

	/// Smallest box containing all points.
	pub fn from_points<I: IntoIterator<Item = DVec3>>(points: I) -> Self {
		let mut aabb = Self::empty();
		for p in points {
			aabb.encapsulate(p);
		}
		aabb
	}

	/// True until at least one point has been added to an `empty()` box.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.min.cmpgt(self.max).any()
	}

	/// Grow to include a point.
	#[inline]
	pub fn encapsulate(&mut self, point: DVec3) {
		self.min = self.min.min(point);
		self.max = self.max.max(point);
	}

	/// Check if this AABB overlaps with another.
	///
	/// Two AABBs overlap if they share any interior or boundary points.
	#[inline]
	pub fn overlaps(&self, other: &Aabb) -> bool {
		self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Check if this AABB fully contains another (boundaries included).
	#[inline]
	pub fn contains(&self, other: &Aabb) -> bool {
		self.contains_point(other.min) && self.contains_point(other.max)
	}

	/// Box grown by `margin` on every side.
	#[inline]
	pub fn expanded(&self, margin: f64) -> Aabb {
		Aabb {
			min: self.min - DVec3::splat(margin),
			max: self.max + DVec3::splat(margin),
		}
	}

	/// Box shrunk by `margin` on every side.
	///
	/// Axes thinner than `2 * margin` collapse to their center.
	#[inline]
	pub fn shrunk(&self, margin: f64) -> Aabb {
		let center = self.center();
		let half = (self.half_extents() - DVec3::splat(margin)).max(DVec3::ZERO);
		Aabb::from_center_half_extents(center, half)
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	#[inline]
	pub fn half_extents(&self) -> DVec3 {
		self.size() * 0.5
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}

	/// Largest edge length.
	#[inline]
	pub fn max_dim(&self) -> f64 {
		self.size().max_element()
	}

	#[inline]
	pub fn is_finite(&self) -> bool {
		self.min.is_finite() && self.max.is_finite()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_center_half_extents() {
		let aabb = Aabb::from_center_half_extents(DVec3::ZERO, DVec3::splat(1.25));
		assert_eq!(aabb.min, DVec3::splat(-1.25));
		assert_eq!(aabb.max, DVec3::splat(1.25));
		assert_eq!(aabb.half_extents(), DVec3::splat(1.25));
	}

	#[test]
	fn test_from_points() {
		let aabb = Aabb::from_points([
			DVec3::new(1.0, -2.0, 0.5),
			DVec3::new(-1.0, 3.0, 0.0),
			DVec3::new(0.0, 0.0, 4.0),
		]);
		assert_eq!(aabb.min, DVec3::new(-1.0, -2.0, 0.0));
		assert_eq!(aabb.max, DVec3::new(1.0, 3.0, 4.0));
		assert!(!aabb.is_empty());
		assert!(Aabb::empty().is_empty());
	}

	#[test]
	fn test_overlaps_touching() {
		// Touching at boundary should count as overlapping
		let a = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
		let b = Aabb::new(DVec3::splat(10.0), DVec3::splat(20.0));
		assert!(a.overlaps(&b));
		assert!(b.overlaps(&a));

		let c = Aabb::new(DVec3::splat(11.0), DVec3::splat(20.0));
		assert!(!a.overlaps(&c));
	}

	#[test]
	fn test_contains_is_inclusive() {
		let outer = Aabb::new(DVec3::splat(-5.0), DVec3::splat(5.0));
		assert!(outer.contains(&outer));
		assert!(outer.contains(&Aabb::new(DVec3::splat(-1.0), DVec3::splat(5.0))));
		assert!(!outer.contains(&Aabb::new(DVec3::splat(-1.0), DVec3::new(5.0, 5.0, 5.1))));
		assert!(outer.contains_point(DVec3::splat(5.0)));
	}

	#[test]
	fn test_expanded_and_shrunk() {
		let aabb = Aabb::new(DVec3::ZERO, DVec3::splat(2.0));
		let grown = aabb.expanded(0.5);
		assert_eq!(grown.min, DVec3::splat(-0.5));
		assert_eq!(grown.max, DVec3::splat(2.5));

		let shrunk = aabb.shrunk(0.5);
		assert_eq!(shrunk.min, DVec3::splat(0.5));
		assert_eq!(shrunk.max, DVec3::splat(1.5));

		// Flat box collapses instead of inverting
		let flat = Aabb::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 2.0)).shrunk(0.1);
		assert!(!flat.is_empty());
		assert_eq!(flat.min.y, 0.0);
		assert_eq!(flat.max.y, 0.0);
	}

	#[test]
	fn test_max_dim_and_finite() {
		let aabb = Aabb::new(DVec3::new(-1.0, -2.0, -3.0), DVec3::new(1.0, 2.0, 3.0));
		assert_eq!(aabb.max_dim(), 6.0);
		assert_eq!(aabb.center(), DVec3::ZERO);
		assert!(aabb.is_finite());
		assert!(!Aabb::empty().is_finite());
	}
}
