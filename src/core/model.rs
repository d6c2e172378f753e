use super::error::HubError;
use super::mesh::{MeshData, Vertex};
use glam::{Mat3, Mat4, Vec3};

/// Hub logo geometry flattened out of a binary glTF, with the material
/// factors of its first primitive.
#[derive(Clone, Debug)]
pub struct LogoMesh {
    pub mesh: MeshData,
    /// Linear RGB.
    pub base_color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

/// Parse a `.glb` (or embedded `.gltf`) and bake every triangle primitive of
/// the default scene into one mesh in model space.
pub fn load_logo_mesh(bytes: &[u8]) -> Result<LogoMesh, HubError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let mut out = LogoMesh {
        mesh: MeshData::default(),
        base_color: [1.0, 1.0, 1.0],
        roughness: 1.0,
        metalness: 1.0,
    };
    let mut material_seen = false;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(HubError::EmptyModel)?;
    let mut stack: Vec<(gltf::Node, Mat4)> = scene.nodes().map(|n| (n, Mat4::IDENTITY)).collect();
    while let Some((node, parent)) = stack.pop() {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    continue;
                }
                let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
                let Some(positions) = reader.read_positions() else {
                    continue;
                };
                let positions: Vec<[f32; 3]> = positions.collect();
                let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
                let uvs: Option<Vec<[f32; 2]>> =
                    reader.read_tex_coords(0).map(|t| t.into_f32().collect());
                let indices: Vec<u32> = match reader.read_indices() {
                    Some(idx) => idx.into_u32().collect(),
                    None => (0..positions.len() as u32).collect(),
                };
                append_primitive(
                    &mut out.mesh,
                    world,
                    &positions,
                    normals.as_deref(),
                    uvs.as_deref(),
                    &indices,
                );

                if !material_seen {
                    material_seen = true;
                    let pbr = primitive.material().pbr_metallic_roughness();
                    let [r, g, b, _] = pbr.base_color_factor();
                    out.base_color = [r, g, b];
                    out.roughness = pbr.roughness_factor();
                    out.metalness = pbr.metallic_factor();
                }
            }
        }
        stack.extend(node.children().map(|c| (c, world)));
    }

    if out.mesh.indices.is_empty() {
        return Err(HubError::EmptyModel);
    }
    log::debug!(
        "[logo] model baked: {} vertices, {} triangles",
        out.mesh.vertices.len(),
        out.mesh.triangle_count()
    );
    Ok(out)
}

fn append_primitive(
    mesh: &mut MeshData,
    world: Mat4,
    positions: &[[f32; 3]],
    normals: Option<&[[f32; 3]]>,
    uvs: Option<&[[f32; 2]]>,
    indices: &[u32],
) {
    let base = mesh.vertices.len() as u32;
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let mirrored = world.determinant() < 0.0;

    let mut local_normals: Vec<Vec3> = match normals {
        Some(n) if n.len() == positions.len() => n.iter().copied().map(Vec3::from).collect(),
        _ => smooth_normals(positions, indices),
    };
    for n in local_normals.iter_mut() {
        *n = (normal_matrix * *n).normalize_or_zero();
    }

    for (i, p) in positions.iter().enumerate() {
        mesh.vertices.push(Vertex {
            position: world.transform_point3(Vec3::from(*p)).to_array(),
            normal: local_normals[i].to_array(),
            uv: uvs.and_then(|u| u.get(i).copied()).unwrap_or([0.0, 0.0]),
        });
    }

    let count = positions.len() as u32;
    for tri in indices.chunks_exact(3) {
        if tri.iter().any(|&i| i >= count) {
            continue;
        }
        let (a, b, c) = (base + tri[0], base + tri[1], base + tri[2]);
        if mirrored {
            mesh.indices.extend_from_slice(&[a, c, b]);
        } else {
            mesh.indices.extend_from_slice(&[a, b, c]);
        }
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let (pa, pb, pc) = (
            Vec3::from(positions[a]),
            Vec3::from(positions[b]),
            Vec3::from(positions[c]),
        );
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter().map(Vec3::normalize_or_zero).collect()
}
