//! glTF 2.0 export of remeshed blueprints.
//!
//! One mesh, one node, one scene. Positions, normals and `u32` indices share
//! a single buffer embedded as a base64 data URI.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use gltf_json as json;
use gridshaper::SurfaceMesh;
use json::buffer::Stride;
use json::validation::Checked::Valid;
use json::validation::USize64;
use std::path::Path;

/// Serialize `mesh` as pretty-printed glTF JSON.
pub fn export_to_gltf(mesh: &SurfaceMesh, name: &str) -> Result<String> {
	if mesh.is_empty() {
		anyhow::bail!("Blueprint has no surface to export");
	}

	let positions_bytes: Vec<u8> = mesh
		.vertices
		.iter()
		.flat_map(|v| v.position)
		.flat_map(f32::to_le_bytes)
		.collect();
	let normals_bytes: Vec<u8> = mesh
		.vertices
		.iter()
		.flat_map(|v| v.normal)
		.flat_map(f32::to_le_bytes)
		.collect();
	let indices_bytes: Vec<u8> = mesh.indices.iter().flat_map(|i| i.to_le_bytes()).collect();

	let mut combined = Vec::with_capacity(positions_bytes.len() + normals_bytes.len() + indices_bytes.len());
	combined.extend_from_slice(&positions_bytes);
	combined.extend_from_slice(&normals_bytes);
	combined.extend_from_slice(&indices_bytes);

	let buffer = json::Buffer {
		byte_length: USize64::from(combined.len()),
		extensions: Default::default(),
		extras: Default::default(),
		name: None,
		uri: Some(format!(
			"data:application/octet-stream;base64,{}",
			general_purpose::STANDARD.encode(&combined)
		)),
	};

	let views = [
		(0, positions_bytes.len(), Some(Stride(12)), json::buffer::Target::ArrayBuffer),
		(
			positions_bytes.len(),
			normals_bytes.len(),
			Some(Stride(12)),
			json::buffer::Target::ArrayBuffer,
		),
		(
			positions_bytes.len() + normals_bytes.len(),
			indices_bytes.len(),
			None,
			json::buffer::Target::ElementArrayBuffer,
		),
	]
	.into_iter()
	.map(|(offset, length, stride, target)| json::buffer::View {
		buffer: json::Index::new(0),
		byte_length: USize64::from(length),
		byte_offset: Some(USize64::from(offset)),
		byte_stride: stride,
		extensions: Default::default(),
		extras: Default::default(),
		name: None,
		target: Some(Valid(target)),
	})
	.collect();

	let mut min_pos = [f32::MAX; 3];
	let mut max_pos = [f32::MIN; 3];
	for vertex in &mesh.vertices {
		for i in 0..3 {
			min_pos[i] = min_pos[i].min(vertex.position[i]);
			max_pos[i] = max_pos[i].max(vertex.position[i]);
		}
	}

	let accessors = vec![
		accessor(
			0,
			mesh.vertices.len(),
			json::accessor::ComponentType::F32,
			json::accessor::Type::Vec3,
			Some((min_pos, max_pos)),
		),
		accessor(
			1,
			mesh.vertices.len(),
			json::accessor::ComponentType::F32,
			json::accessor::Type::Vec3,
			None,
		),
		accessor(
			2,
			mesh.indices.len(),
			json::accessor::ComponentType::U32,
			json::accessor::Type::Scalar,
			None,
		),
	];

	let primitive = json::mesh::Primitive {
		attributes: {
			let mut map = std::collections::BTreeMap::new();
			map.insert(Valid(json::mesh::Semantic::Positions), json::Index::new(0));
			map.insert(Valid(json::mesh::Semantic::Normals), json::Index::new(1));
			map
		},
		extensions: Default::default(),
		extras: Default::default(),
		indices: Some(json::Index::new(2)),
		material: None,
		mode: Valid(json::mesh::Mode::Triangles),
		targets: None,
	};

	let gltf_mesh = json::Mesh {
		extensions: Default::default(),
		extras: Default::default(),
		name: Some(name.to_string()),
		primitives: vec![primitive],
		weights: None,
	};

	let node = json::Node {
		camera: None,
		children: None,
		extensions: Default::default(),
		extras: Default::default(),
		matrix: None,
		mesh: Some(json::Index::new(0)),
		name: Some(name.to_string()),
		rotation: None,
		scale: None,
		translation: None,
		skin: None,
		weights: None,
	};

	let scene = json::Scene {
		extensions: Default::default(),
		extras: Default::default(),
		name: None,
		nodes: vec![json::Index::new(0)],
	};

	let root = json::Root {
		accessors,
		buffers: vec![buffer],
		buffer_views: views,
		meshes: vec![gltf_mesh],
		nodes: vec![node],
		scenes: vec![scene],
		scene: Some(json::Index::new(0)),
		..Default::default()
	};

	serde_json::to_string_pretty(&root).context("Failed to serialize glTF")
}

/// Export and write to `path`.
pub fn write_gltf(mesh: &SurfaceMesh, name: &str, path: &Path) -> Result<()> {
	let gltf = export_to_gltf(mesh, name)?;
	std::fs::write(path, gltf).with_context(|| format!("Failed to write glTF: {}", path.display()))
}

fn accessor(
	view: u32,
	count: usize,
	component: json::accessor::ComponentType,
	type_: json::accessor::Type,
	bounds: Option<([f32; 3], [f32; 3])>,
) -> json::Accessor {
	json::Accessor {
		buffer_view: Some(json::Index::new(view)),
		byte_offset: Some(USize64(0)),
		count: USize64::from(count),
		component_type: Valid(json::accessor::GenericComponentType(component)),
		extensions: Default::default(),
		extras: Default::default(),
		type_: Valid(type_),
		min: bounds.map(|(min, _)| json::Value::from(Vec::from(min))),
		max: bounds.map(|(_, max)| json::Value::from(Vec::from(max))),
		name: None,
		normalized: false,
		sparse: None,
	}
}
