//! Mesh to block blueprint converter.
//!
//! Imports an OBJ model, voxelizes it into cube and slope blocks and writes
//! the blueprint text file the game imports. Optionally exports the block
//! surface as glTF for previewing.

mod config;
mod export;
mod import;

use anyhow::{Context, Result};
use clap::Parser;
use gridshaper::{BlueprintWriter, CancelToken, GridMesher, GridShaper};
use std::path::PathBuf;

use config::Config;

/// Converts OBJ models into block blueprints.
#[derive(Parser, Debug)]
#[command(name = "gridshape")]
#[command(about = "Converts OBJ models into cube/slope block blueprints")]
struct Args {
	/// Input OBJ model.
	input: PathBuf,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Blueprint output folder (overrides the config).
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// Blueprint name (default: input file stem).
	#[arg(short, long)]
	name: Option<String>,

	/// Also write the block surface as glTF to this path.
	#[arg(short, long)]
	mesh: Option<PathBuf>,

	/// Generate and report without writing the blueprint.
	#[arg(long)]
	dry_run: bool,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();

	let config = match &args.config {
		Some(path) => {
			log::info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};

	let name = match &args.name {
		Some(name) => name.clone(),
		None => args
			.input
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.context("Input path has no file name")?,
	};

	let mesh = import::load_obj(&args.input)?;

	let shaper = GridShaper::new(&mesh);
	let shaper = match config.prefab_ids() {
		Some(ids) => shaper.with_prefabs(ids),
		None => shaper,
	};
	let blueprint = shaper
		.generate(&config.generator, &CancelToken::new())
		.with_context(|| format!("Failed to generate blueprint for {}", args.input.display()))?;

	let stats = blueprint.stats();
	log::info!(
		"Generated {} blocks ({} cubes, {} slopes), extent {}x{}x{}, in {:.1} ms",
		stats.total,
		stats.cubes,
		stats.slopes,
		stats.extent.x,
		stats.extent.y,
		stats.extent.z,
		blueprint.generation_time.as_secs_f64() * 1000.0
	);
	if blueprint.is_empty() {
		log::warn!("Blueprint is empty");
	}

	if args.dry_run {
		log::info!("Dry run, blueprint not written");
	} else {
		let output_dir = args
			.output_dir
			.clone()
			.or_else(|| config.output_dir())
			.context("No output folder configured and no config directory found")?;
		let path = BlueprintWriter::new(output_dir)
			.write(&blueprint, &name)
			.context("Failed to write blueprint")?;
		log::info!("  ✓ {}", path.display());
	}

	if let Some(path) = &args.mesh {
		let surface = GridMesher::mesh(&blueprint);
		export::write_gltf(&surface, &name, path)?;
		log::info!("  ✓ {}", path.display());
	}

	Ok(())
}
