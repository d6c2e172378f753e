// Host-side tests for baking the hub logo model out of binary glTF.

#![allow(dead_code)]
mod hub {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod model {
        include!("../src/core/model.rs");
    }
}

use glam::Vec3;
use hub::error::HubError;
use hub::model::*;

fn pad(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
    bytes
}

/// Assemble a GLB container from a JSON document and its binary chunk.
fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let json = pad(json.as_bytes().to_vec(), b' ');
    let bin = pad(bin.to_vec(), 0);
    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

/// One triangle in the XY plane under a parent node carrying `parent_trs`.
fn triangle_glb(parent_trs: &str) -> Vec<u8> {
    let mut bin = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    let json = format!(
        r#"{{
  "asset": {{"version": "2.0"}},
  "scene": 0,
  "scenes": [{{"nodes": [0]}}],
  "nodes": [
    {{"children": [1], {parent_trs}}},
    {{"mesh": 0}}
  ],
  "meshes": [{{"primitives": [{{"attributes": {{"POSITION": 0}}, "indices": 1, "material": 0}}]}}],
  "materials": [{{"pbrMetallicRoughness": {{
    "baseColorFactor": [0.2, 0.4, 0.6, 1.0],
    "metallicFactor": 0.1,
    "roughnessFactor": 0.8
  }}}}],
  "buffers": [{{"byteLength": 44}}],
  "bufferViews": [
    {{"buffer": 0, "byteOffset": 0, "byteLength": 36}},
    {{"buffer": 0, "byteOffset": 36, "byteLength": 6}}
  ],
  "accessors": [
    {{"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
      "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]}},
    {{"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}}
  ]
}}"#
    );
    glb(&json, &bin)
}

fn face_normal(mesh: &hub::mesh::MeshData) -> Vec3 {
    let p = |i: usize| Vec3::from(mesh.vertices[mesh.indices[i] as usize].position);
    (p(1) - p(0)).cross(p(2) - p(0)).normalize()
}

#[test]
fn bakes_node_transforms_and_first_material() {
    let bytes = triangle_glb(r#""translation": [1.0, 0.0, 0.0], "scale": [2.0, 2.0, 2.0]"#);
    let logo = load_logo_mesh(&bytes).expect("triangle glb");
    assert_eq!(logo.mesh.vertices.len(), 3);
    assert_eq!(logo.mesh.triangle_count(), 1);
    let positions: Vec<[f32; 3]> = logo.mesh.vertices.iter().map(|v| v.position).collect();
    assert_eq!(positions, vec![[1.0, 0.0, 0.0], [3.0, 0.0, 0.0], [1.0, 2.0, 0.0]]);
    assert_eq!(logo.base_color, [0.2, 0.4, 0.6]);
    assert_eq!((logo.roughness, logo.metalness), (0.8, 0.1));
}

#[test]
fn missing_normals_are_generated_from_faces() {
    let logo = load_logo_mesh(&triangle_glb(r#""scale": [1.0, 1.0, 1.0]"#)).expect("glb");
    for v in &logo.mesh.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn mirrored_nodes_keep_front_faces_outward() {
    let logo = load_logo_mesh(&triangle_glb(r#""scale": [-1.0, 1.0, 1.0]"#)).expect("glb");
    let n = Vec3::from(logo.mesh.vertices[0].normal);
    assert!(face_normal(&logo.mesh).dot(n) > 0.99);
}

#[test]
fn garbage_is_a_model_error() {
    let err = load_logo_mesh(b"definitely not a model").unwrap_err();
    assert!(matches!(err, HubError::Model(_)));
}

#[test]
fn scene_without_meshes_is_rejected() {
    let json = br#"{"asset": {"version": "2.0"}, "scenes": [{"nodes": [0]}], "nodes": [{}]}"#;
    let err = load_logo_mesh(json).unwrap_err();
    assert!(matches!(err, HubError::EmptyModel));
}
