use std::sync::Arc;
use std::time::Duration;

use glam::DVec3;

use super::*;
use crate::cancel::CancelToken;
use crate::config::GeneratorSettings;
use crate::constants::CUBE;
use crate::grid::VoxelGrid;
use crate::shaper::GridShaper;
use crate::shapes::{ShapeCatalog, SHAPE_ORIENTATIONS};
use crate::test_utils::cube_mesh;

const CUBE_ID: &str = "2eacbbf2-d8fb-4a78-91dc-7b492517ef97";

fn blueprint_with(cells: &[(IVec3, i32)]) -> Blueprint {
  let mut grid = VoxelGrid::new(3);
  for &(cell, content) in cells {
    grid.set(cell, content);
  }
  Blueprint {
    grid,
    indexer: GridIndexer::new(DVec3::ZERO, 2.5),
    catalog: ShapeCatalog::shared(BlockSize::Large),
    generation_time: Duration::ZERO,
  }
}

#[test]
fn test_footprints() {
  let large = Footprint::for_block_size(BlockSize::Large);
  assert_eq!(large.min, IVec3::splat(-4));
  assert_eq!(large.max, IVec3::splat(5));

  let mid = Footprint::for_block_size(BlockSize::Mid);
  assert_eq!(mid.min, IVec3::ZERO);
  assert_eq!(mid.max, IVec3::ONE);
}

#[test]
fn test_identity_orientation_has_no_offset() {
  for size in [BlockSize::Large, BlockSize::Mid] {
    let footprint = Footprint::for_block_size(size);
    assert_eq!(position_offset(&footprint, Direction::Forward, Direction::Up), IVec3::ZERO);
  }
}

#[test]
fn test_rotation_offsets_only_rotated_axes() {
  let footprint = Footprint::for_block_size(BlockSize::Large);

  // 90° about Y: X and Z swap roles, Y untouched
  assert_eq!(position_offset(&footprint, Direction::Left, Direction::Up), IVec3::new(0, 0, 1));
  // 180° about Z: X and Y flip
  assert_eq!(position_offset(&footprint, Direction::Forward, Direction::Down), IVec3::new(1, 1, 0));

  let mid = Footprint::for_block_size(BlockSize::Mid);
  assert_eq!(position_offset(&mid, Direction::Left, Direction::Up), IVec3::new(0, 0, 1));
}

#[test]
fn test_offsets_stay_within_one_lattice_step() {
  let footprint = Footprint::for_block_size(BlockSize::Large);
  for (forward, up) in SHAPE_ORIENTATIONS {
    let offset = position_offset(&footprint, forward, up);
    assert!(offset.cmpge(IVec3::ZERO).all() && offset.cmple(IVec3::ONE).all(), "{:?}/{:?}", forward, up);
  }
}

#[test]
fn test_cube_model_writes_eight_records() {
  let mesh = cube_mesh(5.0);
  let blueprint = GridShaper::new(&mesh)
    .generate(&GeneratorSettings::default(), &CancelToken::new())
    .unwrap();
  let text = BlueprintWriter::render(&blueprint).unwrap();

  let lines: Vec<&str> = text.lines().collect();
  assert_eq!(lines.len(), 8);
  assert_eq!(lines[0], format!("{CUBE_ID}|-5|-5|-5|0|0|0.25|0|4|1"));
  assert_eq!(lines[7], format!("{CUBE_ID}|5|5|5|0|0|0.25|0|4|1"));
  for line in &lines {
    assert_eq!(line.split('|').count(), 10);
  }
}

#[test]
fn test_slope_record() {
  // Cell (1, 1, 1) center = 3.75 → lattice 15; shape 1 = (Left, Up)
  let blueprint = blueprint_with(&[(IVec3::ONE, 1)]);
  let text = BlueprintWriter::render(&blueprint).unwrap();
  assert_eq!(
    text,
    "f9efcc6c-6c76-4762-bbf0-6013ec969539|15|15|16|0|0|0.25|2|4|1\n"
  );
}

#[test]
fn test_record_format() {
  // Ten fields, newline-terminated, no delimiter after the integrity field.
  let blueprint = blueprint_with(&[(IVec3::ZERO, CUBE), (IVec3::ONE, 1)]);
  let text = BlueprintWriter::render(&blueprint).unwrap();
  assert!(text.ends_with('\n'));
  for line in text.lines() {
    assert!(!line.ends_with('|'), "trailing delimiter in {line:?}");
    let fields: Vec<&str> = line.split('|').collect();
    assert_eq!(fields.len(), 10);
    assert_eq!(&fields[4..7], &["0", "0", "0.25"]);
    assert_eq!(fields[9], "1");
  }
  assert_eq!(text.lines().next(), Some(format!("{CUBE_ID}|5|5|5|0|0|0.25|0|4|1").as_str()));
}

#[test]
fn test_negative_content_is_rejected() {
  let blueprint = blueprint_with(&[(IVec3::ZERO, CUBE), (IVec3::new(2, 0, 0), -3)]);
  match BlueprintWriter::render(&blueprint) {
    Err(BlueprintError::UnsupportedContent { cell, content }) => {
      assert_eq!(cell, IVec3::new(2, 0, 0));
      assert_eq!(content, -3);
    }
    other => panic!("expected UnsupportedContent, got {:?}", other),
  }
}

#[test]
fn test_unknown_shape_is_rejected() {
  let blueprint = blueprint_with(&[(IVec3::ZERO, 13)]);
  assert!(matches!(
    BlueprintWriter::render(&blueprint),
    Err(BlueprintError::UnknownShape { content: 13, .. })
  ));
}

#[test]
fn test_write_to_sink() {
  let blueprint = blueprint_with(&[(IVec3::ZERO, CUBE)]);
  let mut sink = Vec::new();
  BlueprintWriter::write_to(&blueprint, &mut sink).unwrap();
  assert_eq!(String::from_utf8(sink).unwrap(), BlueprintWriter::render(&blueprint).unwrap());
}

#[test]
fn test_failed_render_leaves_no_file() {
  let dir = std::env::temp_dir().join(format!("gridshaper_writer_{}", std::process::id()));
  let writer = BlueprintWriter::new(&dir);

  let good = blueprint_with(&[(IVec3::ZERO, CUBE)]);
  let path = writer.write(&good, "good").unwrap();
  assert_eq!(path, dir.join("good.txt"));
  assert_eq!(std::fs::read_to_string(&path).unwrap(), BlueprintWriter::render(&good).unwrap());

  let bad = Blueprint {
    catalog: Arc::new(ShapeCatalog::new(BlockSize::Large)),
    ..blueprint_with(&[(IVec3::ZERO, -1)])
  };
  assert!(writer.write(&bad, "bad").is_err());
  assert!(!dir.join("bad.txt").exists());

  let _ = std::fs::remove_dir_all(&dir);
}
