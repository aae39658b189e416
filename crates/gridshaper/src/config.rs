//! Generator settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
  DEFAULT_MAX_CELLS_PER_AXIS, FINE_LATTICE_UNIT, LARGE_BLOCK_SIZE, MID_BLOCK_SIZE,
};

/// Block size variant. Selects the cell size and the shape catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
  /// 2.5 unit blocks.
  #[default]
  Large,
  /// 0.5 unit blocks.
  Mid,
}

impl BlockSize {
  /// Edge length in world units.
  pub const fn edge_length(self) -> f64 {
    match self {
      BlockSize::Large => LARGE_BLOCK_SIZE,
      BlockSize::Mid => MID_BLOCK_SIZE,
    }
  }

  /// Edge length in fine lattice units (10 for large, 2 for mid).
  pub fn lattice_width(self) -> i32 {
    (self.edge_length() / FINE_LATTICE_UNIT).round() as i32
  }
}

/// External id tokens written for the catalog's shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefabIds {
  /// Id of the full cube block.
  pub cube: String,
  /// Id of the slope block (orientation selects which slope).
  pub slope: String,
}

impl PrefabIds {
  /// Built-in ids for a block size.
  pub fn for_block_size(size: BlockSize) -> Self {
    match size {
      BlockSize::Large => Self {
        cube: "2eacbbf2-d8fb-4a78-91dc-7b492517ef97".into(),
        slope: "f9efcc6c-6c76-4762-bbf0-6013ec969539".into(),
      },
      BlockSize::Mid => Self {
        cube: "mid_block_cube".into(),
        slope: "mid_block_slope".into(),
      },
    }
  }
}

/// Settings for one generation run.
///
/// Missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
  /// Place slopes that face upward.
  pub slopes_upper: bool,
  /// Place slopes that face downward.
  pub slopes_lower: bool,
  /// Place slopes on vertical edges.
  pub slopes_sides: bool,
  /// Require both support cells to be cubes instead of at least one.
  pub slopes_must_be_supported: bool,
  pub block_size: BlockSize,
  /// Upper bound for the grid dimension. Larger models fail with
  /// [`GridTooLarge`](crate::BlueprintError::GridTooLarge).
  pub max_cells_per_axis: usize,
}

impl Default for GeneratorSettings {
  fn default() -> Self {
    Self {
      slopes_upper: true,
      slopes_lower: true,
      slopes_sides: true,
      slopes_must_be_supported: false,
      block_size: BlockSize::Large,
      max_cells_per_axis: DEFAULT_MAX_CELLS_PER_AXIS,
    }
  }
}

impl GeneratorSettings {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cubes only.
  pub fn without_slopes() -> Self {
    Self::default().with_slopes(false, false, false)
  }

  pub fn with_slopes(mut self, upper: bool, lower: bool, sides: bool) -> Self {
    self.slopes_upper = upper;
    self.slopes_lower = lower;
    self.slopes_sides = sides;
    self
  }

  pub fn with_supported_slopes(mut self, required: bool) -> Self {
    self.slopes_must_be_supported = required;
    self
  }

  pub fn with_block_size(mut self, size: BlockSize) -> Self {
    self.block_size = size;
    self
  }

  pub fn with_max_cells_per_axis(mut self, limit: usize) -> Self {
    self.max_cells_per_axis = limit;
    self
  }

  /// Cell edge length in world units.
  #[inline]
  pub fn cell_size(&self) -> f64 {
    self.block_size.edge_length()
  }

  pub fn any_slopes(&self) -> bool {
    self.slopes_upper || self.slopes_lower || self.slopes_sides
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
