// Host-side tests for procedural episode geometry.

#![allow(dead_code)]
mod hub {
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
}

use glam::Vec3;
use hub::mesh::*;

fn all_primitives() -> Vec<Primitive> {
    vec![
        Primitive::Box {
            width: 0.22,
            height: 0.14,
            depth: 0.02,
        },
        Primitive::Box {
            width: 0.2,
            height: 0.2,
            depth: 0.2,
        },
        Primitive::Cylinder {
            radius_top: 0.08,
            radius_bottom: 0.08,
            height: 0.24,
            segments: 12,
        },
        Primitive::Sphere {
            radius: 0.12,
            width_segments: 16,
            height_segments: 16,
        },
        Primitive::Octahedron { radius: 0.14 },
        Primitive::Torus {
            radius: 0.12,
            tube: 0.04,
            radial_segments: 12,
            tubular_segments: 24,
        },
        Primitive::Cone {
            radius: 0.12,
            height: 0.24,
            segments: 12,
        },
        Primitive::Torus {
            radius: 0.11,
            tube: 0.035,
            radial_segments: 10,
            tubular_segments: 6,
        },
        Primitive::Plane {
            width: 2.2,
            height: 2.2,
        },
    ]
}

#[test]
fn indices_are_in_range_and_form_triangles() {
    for p in all_primitives() {
        let m = p.build();
        assert!(!m.vertices.is_empty(), "{:?}", p);
        assert_eq!(m.indices.len() % 3, 0, "{:?}", p);
        assert!(m.triangle_count() > 0);
        let n = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < n), "{:?} index out of range", p);
    }
}

#[test]
fn normals_are_unit_length() {
    for p in all_primitives() {
        for v in p.build().vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "{:?} normal length {}", p, len);
        }
    }
}

#[test]
fn vertices_fit_inside_bounding_radius() {
    for p in all_primitives() {
        let r = p.bounding_radius();
        for v in p.build().vertices {
            let d = Vec3::from_array(v.position).length();
            assert!(d <= r + 1e-4, "{:?}: {} > {}", p, d, r);
        }
    }
}

#[test]
fn cuboid_has_six_quads() {
    let m = cuboid(1.0, 2.0, 3.0);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.triangle_count(), 12);
    let max = m
        .vertices
        .iter()
        .fold(Vec3::ZERO, |acc, v| acc.max(Vec3::from_array(v.position)));
    assert!((max - Vec3::new(0.5, 1.0, 1.5)).length() < 1e-6);
}

#[test]
fn cone_skips_the_degenerate_top_cap() {
    let cone = cylinder(0.0, 0.12, 0.24, 12);
    let tube = cylinder(0.12, 0.12, 0.24, 12);
    assert!(cone.triangle_count() < tube.triangle_count());
    assert_eq!(tube.triangle_count() - cone.triangle_count(), 12);
}

#[test]
fn octahedron_is_flat_shaded() {
    let m = octahedron(1.0);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.triangle_count(), 8);
    for tri in m.vertices.chunks(3) {
        assert_eq!(tri[0].normal, tri[1].normal);
        assert_eq!(tri[1].normal, tri[2].normal);
    }
}

#[test]
fn sphere_vertices_lie_on_surface() {
    let m = sphere(0.5, 8, 6);
    for v in &m.vertices {
        let d = Vec3::from_array(v.position).length();
        assert!((d - 0.5).abs() < 1e-4);
    }
}

#[test]
fn torus_lies_in_xy_plane() {
    let m = torus(1.0, 0.25, 8, 16);
    for v in &m.vertices {
        assert!(v.position[2].abs() <= 0.25 + 1e-5);
    }
    assert_eq!(m.vertices.len(), 9 * 17);
}

#[test]
fn plane_faces_positive_z_with_full_uv_range() {
    let m = plane(2.0, 1.0);
    assert_eq!(m.vertices.len(), 4);
    assert!(m.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    let us: Vec<f32> = m.vertices.iter().map(|v| v.uv[0]).collect();
    assert!(us.contains(&0.0) && us.contains(&1.0));
}

#[test]
fn segment_counts_are_floored() {
    let m = cylinder(0.1, 0.1, 0.2, 0);
    assert!(m.triangle_count() >= 3 * 2);
    let s = sphere(1.0, 1, 1);
    assert!(s.triangle_count() > 0);
}
