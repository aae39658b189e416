//! Voxelizer: turns a triangle mesh into a [`Blueprint`].
//!
//! # Stages
//!
//! 1. **Sizing** ([`sizing`]): power-of-two cube of cells around the model
//! 2. **Rasterization** ([`rasterize`]): surface cells become cubes
//! 3. **Slope synthesis** ([`slopes`]): wedges fill empty cells on cube edges
//!
//! Cancellation is checked before sizing, during and after rasterization and
//! before every slope pass; a cancelled run returns
//! [`BlueprintError::Cancelled`](crate::BlueprintError::Cancelled) and no
//! partial blueprint.
//!
//! # Example
//!
//! ```ignore
//! let mesh: TriangleMesh = import_somehow();
//! let settings = GeneratorSettings::default();
//! let blueprint = GridShaper::new(&mesh).generate(&settings, &CancelToken::new())?;
//! println!("{:?}", blueprint.stats());
//! ```

pub mod rasterize;
pub mod sizing;
pub mod slopes;

use std::sync::Arc;
use std::time::Duration;

use glam::IVec3;
use web_time::Instant;

use crate::cancel::CancelToken;
use crate::config::{GeneratorSettings, PrefabIds};
use crate::constants::{CUBE, NO_CONTENT};
use crate::error::Result;
use crate::grid::{GridIndexer, VoxelGrid};
use crate::shapes::ShapeCatalog;
use crate::types::{MeshBounds, TriangleMesh};

pub use sizing::{size_grid, GridSizing, ModelScale};

/// Generated block grid together with everything needed to interpret it.
///
/// Read-only once built; the remesher and writer only borrow it.
#[derive(Clone, Debug)]
pub struct Blueprint {
  pub grid: VoxelGrid,
  pub indexer: GridIndexer,
  pub catalog: Arc<ShapeCatalog>,
  /// Wall time spent in `generate`.
  pub generation_time: Duration,
}

/// Block counts and footprint of a blueprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlueprintStats {
  pub total: usize,
  pub cubes: usize,
  pub slopes: usize,
  /// Blocks spanned per axis by non-empty cells (zero when empty).
  pub extent: IVec3,
}

impl Blueprint {
  pub fn stats(&self) -> BlueprintStats {
    let mut stats = BlueprintStats::default();
    let mut lo = IVec3::MAX;
    let mut hi = IVec3::MIN;
    for (cell, content) in self.grid.occupied() {
      stats.total += 1;
      if content == CUBE {
        stats.cubes += 1;
      } else {
        stats.slopes += 1;
      }
      lo = lo.min(cell);
      hi = hi.max(cell);
    }
    if stats.total > 0 {
      stats.extent = hi - lo + IVec3::ONE;
    }
    stats
  }

  /// True when no cell holds a block.
  pub fn is_empty(&self) -> bool {
    self.grid.cells().iter().all(|&c| c == NO_CONTENT)
  }
}

/// Voxelizer for one mesh.
pub struct GridShaper<'a> {
  mesh: &'a TriangleMesh,
  bounds: &'a dyn MeshBounds,
  prefabs: Option<PrefabIds>,
}

impl<'a> GridShaper<'a> {
  /// Voxelizer sizing the grid from the mesh's own bounds.
  pub fn new(mesh: &'a TriangleMesh) -> Self {
    Self {
      mesh,
      bounds: mesh,
      prefabs: None,
    }
  }

  /// Voxelizer sizing the grid from an external bounding-volume query.
  pub fn with_bounds(mesh: &'a TriangleMesh, bounds: &'a dyn MeshBounds) -> Self {
    Self {
      mesh,
      bounds,
      prefabs: None,
    }
  }

  /// Use custom external ids instead of the shared catalog.
  pub fn with_prefabs(mut self, prefabs: PrefabIds) -> Self {
    self.prefabs = Some(prefabs);
    self
  }

  /// Run sizing, rasterization and slope synthesis.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "shaper::generate"))]
  pub fn generate(&self, settings: &GeneratorSettings, cancel: &CancelToken) -> Result<Blueprint> {
    let start = Instant::now();
    cancel.check()?;

    let catalog = match &self.prefabs {
      Some(ids) => Arc::new(ShapeCatalog::with_prefabs(settings.block_size, ids.clone())),
      None => ShapeCatalog::shared(settings.block_size),
    };

    let model_bounds = self.bounds.mesh_bounds()?;
    let sizing = size_grid(&model_bounds, settings.cell_size(), settings.max_cells_per_axis)?;
    let mut grid = VoxelGrid::new(sizing.dim);

    let _cubes = rasterize::rasterize(self.mesh, &sizing.indexer, &mut grid, cancel)?;
    let _slopes = slopes::synthesize_slopes(&mut grid, settings, cancel)?;

    let generation_time = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
      dim = sizing.dim,
      cubes = _cubes,
      slopes = _slopes,
      elapsed_ms = generation_time.as_secs_f64() * 1000.0,
      "generated blueprint"
    );

    Ok(Blueprint {
      grid,
      indexer: sizing.indexer,
      catalog,
      generation_time,
    })
  }
}
