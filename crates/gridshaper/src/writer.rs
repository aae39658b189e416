//! Blueprint text export.
//!
//! One line per block, pipe-delimited:
//!
//! ```text
//! ExternalId|X|Y|Z|Hue|Saturation|Value|Forward|Up|Integrity
//! ```
//!
//! Positions are in fine lattice units (0.25 world units), corrected by the
//! footprint offset of the block's orientation. Color fields are constant
//! placeholders and integrity is always 1.

use std::path::{Path, PathBuf};

use glam::IVec3;

use crate::config::BlockSize;
use crate::constants::{Direction, FINE_LATTICE_UNIT};
use crate::error::{BlueprintError, Result};
use crate::geometry::orientation_frame_dirs;
use crate::grid::GridIndexer;
use crate::shaper::Blueprint;

const HUE: i32 = 0;
const SATURATION: i32 = 0;
const VALUE: &str = "0.25";
const INTEGRITY: i32 = 1;

/// Lattice box a block occupies relative to its written position, in the
/// canonical orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
  pub min: IVec3,
  pub max: IVec3,
}

impl Footprint {
  /// `-(n/2 - 1) ..= n/2` on every axis, `n` being the block's lattice width.
  pub fn for_block_size(size: BlockSize) -> Self {
    let half = size.lattice_width() / 2;
    Self {
      min: IVec3::splat(1 - half),
      max: IVec3::splat(half),
    }
  }
}

/// Correction added to a block's base position so that it refers to the
/// minimum corner of the rotated footprint.
pub fn position_offset(footprint: &Footprint, forward: Direction, up: Direction) -> IVec3 {
  let frame = orientation_frame_dirs(forward, up);
  let a = (frame * footprint.min.as_dvec3()).round().as_ivec3();
  let b = (frame * footprint.max.as_dvec3()).round().as_ivec3();
  footprint.min - a.min(b)
}

/// Cell center in lattice units.
#[inline]
pub fn base_position(indexer: &GridIndexer, cell: IVec3) -> IVec3 {
  (indexer.cell_center(cell) / FINE_LATTICE_UNIT).round().as_ivec3()
}

/// Writes blueprints as `<name>.txt` into a folder.
#[derive(Clone, Debug)]
pub struct BlueprintWriter {
  pub write_folder: PathBuf,
}

impl BlueprintWriter {
  pub fn new(write_folder: impl Into<PathBuf>) -> Self {
    Self {
      write_folder: write_folder.into(),
    }
  }

  /// Append one record per non-empty cell to `out`, in linear cell order.
  pub fn generate(blueprint: &Blueprint, out: &mut String) -> Result<()> {
    let footprint = Footprint::for_block_size(blueprint.catalog.block_size());

    // Offsets only depend on the orientation; 13 shapes at most.
    let mut offsets: Vec<Option<IVec3>> = vec![None; blueprint.catalog.len()];

    for (cell, content) in blueprint.grid.occupied() {
      if content < 0 {
        return Err(BlueprintError::UnsupportedContent { cell, content });
      }
      let shape = blueprint
        .catalog
        .get(content)
        .ok_or(BlueprintError::UnknownShape { cell, content })?;

      let offset = *offsets[content as usize]
        .get_or_insert_with(|| position_offset(&footprint, shape.forward, shape.up));
      let p = base_position(&blueprint.indexer, cell) + offset;

      out.push_str(&format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}\n",
        shape.external_id,
        p.x,
        p.y,
        p.z,
        HUE,
        SATURATION,
        VALUE,
        shape.forward as u8,
        shape.up as u8,
        INTEGRITY,
      ));
    }
    Ok(())
  }

  /// Whole blueprint as text.
  pub fn render(blueprint: &Blueprint) -> Result<String> {
    let mut out = String::new();
    Self::generate(blueprint, &mut out)?;
    Ok(out)
  }

  /// Render fully, then hand the text to `sink` in a single write.
  pub fn write_to<W: std::io::Write>(blueprint: &Blueprint, sink: &mut W) -> Result<()> {
    let text = Self::render(blueprint)?;
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(())
  }

  /// Path the blueprint `name` is written to.
  pub fn path_for(&self, name: &str) -> PathBuf {
    self.write_folder.join(format!("{name}.txt"))
  }

  /// Write `<write_folder>/<name>.txt`, creating the folder if needed.
  ///
  /// Nothing touches the file system unless the whole blueprint renders.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "writer::write"))]
  pub fn write(&self, blueprint: &Blueprint, name: &str) -> Result<PathBuf> {
    let text = Self::render(blueprint)?;
    ensure_dir(&self.write_folder)?;
    let path = self.path_for(name);
    std::fs::write(&path, text)?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), "wrote blueprint");

    Ok(path)
  }
}

fn ensure_dir(dir: &Path) -> Result<()> {
  if !dir.as_os_str().is_empty() {
    std::fs::create_dir_all(dir)?;
  }
  Ok(())
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
