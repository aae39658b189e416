//! OBJ import.
//!
//! All models in the file are merged into one triangle mesh. Faces are
//! triangulated on load; normals are kept only when every model has them.

use anyhow::{Context, Result};
use glam::DVec3;
use gridshaper::TriangleMesh;
use std::path::Path;

/// Load an OBJ file as a single mesh.
pub fn load_obj(path: &Path) -> Result<TriangleMesh> {
	let options = tobj::LoadOptions {
		triangulate: true,
		single_index: true,
		..Default::default()
	};
	let (models, _materials) =
		tobj::load_obj(path, &options).with_context(|| format!("Failed to load OBJ: {}", path.display()))?;

	let mesh = merge_models(&models);
	if mesh.is_empty() {
		anyhow::bail!("No triangles in {}", path.display());
	}

	log::info!(
		"Imported {} model(s): {} vertices, {} triangles",
		models.len(),
		mesh.positions.len(),
		mesh.triangle_count()
	);
	Ok(mesh)
}

/// Concatenate models, rebasing each model's indices.
pub fn merge_models(models: &[tobj::Model]) -> TriangleMesh {
	let mut positions = Vec::new();
	let mut normals = Vec::new();
	let mut indices = Vec::new();
	let mut all_normals = true;

	for model in models {
		let mesh = &model.mesh;
		let base = positions.len() as u32;

		positions.extend(to_dvec3(&mesh.positions));
		if mesh.normals.len() == mesh.positions.len() {
			normals.extend(to_dvec3(&mesh.normals));
		} else {
			all_normals = false;
		}
		indices.extend(
			mesh.indices
				.chunks_exact(3)
				.map(|t| [base + t[0], base + t[1], base + t[2]]),
		);
	}

	let mesh = TriangleMesh::new(positions, indices);
	if all_normals && !normals.is_empty() {
		mesh.with_normals(normals)
	} else {
		mesh
	}
}

fn to_dvec3(values: &[f32]) -> impl Iterator<Item = DVec3> + '_ {
	values
		.chunks_exact(3)
		.map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
}
