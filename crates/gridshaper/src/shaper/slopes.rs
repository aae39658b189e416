//! Slope synthesis: fill empty cells on cube edges with wedges.
//!
//! A slope `(forward, up)` occupies the forward/down half of its cell. It is
//! placed in an empty cell `g` when:
//! - the open sides are free: `g - forward` and `g + up` are in range and empty
//! - it rests on cubes: `g + forward` and/or `g - up` hold a cube (both when
//!   supported slopes are required)
//!
//! Without the supported-slopes setting the support check is relaxed to one
//! cube, not dropped: every slope rests on at least one cube. Without any
//! support, each empty cell with free open sides would take a slope and the
//! air around a model would fill up.
//!
//! Shapes are tried in catalog order and cells in linear order; a placed
//! slope is visible to every later check (first fit).

use glam::IVec3;

use crate::cancel::CancelToken;
use crate::config::GeneratorSettings;
use crate::constants::{Direction, CUBE, NO_CONTENT};
use crate::error::Result;
use crate::grid::VoxelGrid;
use crate::shapes::{SlopeGroup, SHAPE_ORIENTATIONS};

/// True when `group` is switched on in `settings`.
pub fn group_enabled(settings: &GeneratorSettings, group: SlopeGroup) -> bool {
  match group {
    SlopeGroup::Upper => settings.slopes_upper,
    SlopeGroup::Lower => settings.slopes_lower,
    SlopeGroup::Side => settings.slopes_sides,
  }
}

/// Run all enabled slope passes. Returns the number of slopes placed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "shaper::synthesize_slopes"))]
pub fn synthesize_slopes(
  grid: &mut VoxelGrid,
  settings: &GeneratorSettings,
  cancel: &CancelToken,
) -> Result<usize> {
  let mut placed = 0;
  for group in SlopeGroup::ALL {
    if !group_enabled(settings, group) {
      continue;
    }
    for shape in group.indices() {
      cancel.check()?;
      let (forward, up) = SHAPE_ORIENTATIONS[shape];
      let count = place_slopes(grid, shape as i32, forward, up, settings.slopes_must_be_supported);

      #[cfg(feature = "tracing")]
      tracing::trace!(shape, ?forward, ?up, count, "slope pass");

      placed += count;
    }
  }
  Ok(placed)
}

/// One pass for a single shape over the whole grid.
pub fn place_slopes(
  grid: &mut VoxelGrid,
  content: i32,
  forward: Direction,
  up: Direction,
  require_both_supports: bool,
) -> usize {
  let mut placed = 0;
  for index in 0..grid.len() {
    if grid.cells()[index] != NO_CONTENT {
      continue;
    }
    let cell = grid.coord_of(index);
    if can_place_slope(grid, cell, forward, up, require_both_supports) {
      grid.set(cell, content);
      placed += 1;
    }
  }
  placed
}

/// Placement rule for a `(forward, up)` slope at `cell`.
pub fn can_place_slope(
  grid: &VoxelGrid,
  cell: IVec3,
  forward: Direction,
  up: Direction,
  require_both_supports: bool,
) -> bool {
  let f = forward.vector();
  let u = up.vector();

  let open = |c: IVec3| grid.get_checked(c) == Some(NO_CONTENT);
  if !open(cell) || !open(cell - f) || !open(cell + u) {
    return false;
  }

  let front = grid.get(cell + f) == CUBE;
  let below = grid.get(cell - u) == CUBE;
  if require_both_supports {
    front && below
  } else {
    front || below
  }
}

#[cfg(test)]
#[path = "slopes_test.rs"]
mod slopes_test;
