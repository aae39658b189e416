//! Geometric kernel: triangle/box overlap and block orientation frames.

pub mod intersect;
pub mod orientation;

pub use intersect::{intersect_box_triangle, triangle_overlaps_box, IntersectResult};
pub use orientation::{orientation_frame, orientation_frame_dirs};
