//! Configuration parsing for blueprint generation.

use anyhow::{Context, Result};
use gridshaper::{GeneratorSettings, PrefabIds};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Slope groups, support rule, block size and grid limit.
	pub generator: GeneratorSettings,
	/// External id overrides.
	pub prefabs: PrefabOverrides,
	/// Blueprint output folder (default: the game's import folder).
	pub output_dir: Option<PathBuf>,
}

/// External id overrides; unset ids keep the block size's built-in value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrefabOverrides {
	pub cube: Option<String>,
	pub slope: Option<String>,
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.generator.max_cells_per_axis == 0 {
			anyhow::bail!("generator.max_cells_per_axis must be positive");
		}
		for (field, id) in [("cube", &config.prefabs.cube), ("slope", &config.prefabs.slope)] {
			let Some(id) = id else { continue };
			if id.is_empty() {
				anyhow::bail!("prefabs.{field} must not be empty");
			}
			if id.contains(['|', '\n', '\r']) {
				anyhow::bail!("prefabs.{field} must not contain '|' or line breaks, got {id:?}");
			}
		}

		Ok(config)
	}

	/// Ids to write, or `None` when the built-in catalog applies.
	pub fn prefab_ids(&self) -> Option<PrefabIds> {
		if self.prefabs.cube.is_none() && self.prefabs.slope.is_none() {
			return None;
		}
		let defaults = PrefabIds::for_block_size(self.generator.block_size);
		Some(PrefabIds {
			cube: self.prefabs.cube.clone().unwrap_or(defaults.cube),
			slope: self.prefabs.slope.clone().unwrap_or(defaults.slope),
		})
	}

	/// Configured output folder, falling back to the game's import folder.
	pub fn output_dir(&self) -> Option<PathBuf> {
		self.output_dir.clone().or_else(default_import_folder)
	}
}

/// `<config dir>/SpaceEngineers2/AppData/SE1GridsToImport`.
pub fn default_import_folder() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("SpaceEngineers2").join("AppData").join("SE1GridsToImport"))
}
