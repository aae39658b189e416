use super::*;

#[test]
fn test_defaults() {
  let settings = GeneratorSettings::default();
  assert!(settings.slopes_upper && settings.slopes_lower && settings.slopes_sides);
  assert!(!settings.slopes_must_be_supported);
  assert_eq!(settings.block_size, BlockSize::Large);
  assert_eq!(settings.cell_size(), 2.5);
}

#[test]
fn test_lattice_width() {
  assert_eq!(BlockSize::Large.lattice_width(), 10);
  assert_eq!(BlockSize::Mid.lattice_width(), 2);
}

#[test]
fn test_builder() {
  let settings = GeneratorSettings::new()
    .with_slopes(true, false, false)
    .with_supported_slopes(true)
    .with_block_size(BlockSize::Mid)
    .with_max_cells_per_axis(64);
  assert!(settings.slopes_upper);
  assert!(!settings.slopes_lower);
  assert!(settings.any_slopes());
  assert_eq!(settings.cell_size(), 0.5);
  assert_eq!(settings.max_cells_per_axis, 64);

  assert!(!GeneratorSettings::without_slopes().any_slopes());
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
  let settings: GeneratorSettings = toml::from_str(
    r#"
      slopes_lower = false
      block_size = "mid"
    "#,
  )
  .unwrap();
  assert!(settings.slopes_upper);
  assert!(!settings.slopes_lower);
  assert_eq!(settings.block_size, BlockSize::Mid);
  assert_eq!(settings.max_cells_per_axis, DEFAULT_MAX_CELLS_PER_AXIS);
}

#[test]
fn test_unknown_block_size_rejected() {
  let result: Result<GeneratorSettings, _> = toml::from_str(r#"block_size = "small""#);
  assert!(result.is_err());
}

#[test]
fn test_prefab_ids_differ_per_size() {
  let large = PrefabIds::for_block_size(BlockSize::Large);
  let mid = PrefabIds::for_block_size(BlockSize::Mid);
  assert_ne!(large, mid);
  assert_ne!(large.cube, large.slope);
}
