//! Block orientation frames.
//!
//! A block is authored in a canonical frame (forward = -Z, up = +Y). Placing
//! it with a `(forward, up)` pair maps canonical axes through
//! `[up × -forward, up, -forward]`, i.e. canonical +X becomes the block's
//! right, +Y its up and +Z its back.

use glam::{DMat3, DVec3};

use crate::constants::Direction;

/// Rotation taking canonical block space to the `(forward, up)` orientation.
///
/// `forward` and `up` must be perpendicular unit vectors; the result is then a
/// proper rotation.
#[inline]
pub fn orientation_frame(forward: DVec3, up: DVec3) -> DMat3 {
  let back = -forward;
  DMat3::from_cols(up.cross(back), up, back)
}

/// [`orientation_frame`] for axis directions.
#[inline]
pub fn orientation_frame_dirs(forward: Direction, up: Direction) -> DMat3 {
  orientation_frame(forward.as_dvec3(), up.as_dvec3())
}

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;
