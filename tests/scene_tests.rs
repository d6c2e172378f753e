// Host-side tests for episode content, materials, animation and billboarding.

#![allow(dead_code)]
mod hub {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod episodes {
        include!("../src/core/episodes.rs");
    }
    pub mod journey {
        include!("../src/core/journey.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use glam::Vec3;
use hub::camera::Camera;
use hub::constants::*;
use hub::episodes::*;
use hub::mesh::Primitive;
use hub::scene::*;

#[test]
fn episode_table_is_complete_and_ordered() {
    assert_eq!(EPISODES.len(), EPISODE_COUNT);
    for (i, ep) in EPISODES.iter().enumerate() {
        assert_eq!(ep.number, format!("EP{:02}", i + 1));
        assert!(!ep.short.is_empty());
        assert!(!ep.title.is_empty());
        assert!(!ep.description.is_empty());
        assert!(!ep.xp_hook.is_empty());
        assert!(!ep.links.is_empty());
        for link in ep.links {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
    }
}

#[test]
fn cameo_hunts_are_episodes_two_and_five() {
    let cameos: Vec<&str> = EPISODES
        .iter()
        .filter(|e| e.is_cameo())
        .map(|e| e.number)
        .collect();
    assert_eq!(cameos, ["EP02", "EP05"]);
    assert_eq!(EPISODES[1].tag(), "Cameo Challenge");
    assert_eq!(EPISODES[0].tag(), "Narrative");
}

#[test]
fn episode_lookup_by_position() {
    assert_eq!(episode_at(2).map(|e| e.number), Some("EP03"));
    assert_eq!(episode_at(7).map(|e| e.number), Some("EP08"));
    assert!(episode_at(8).is_none());
}

#[test]
fn header_title_format() {
    assert_eq!(EPISODES[2].header_title(), "EP03/08 — Elbow TV");
}

#[test]
fn primitives_follow_episode_order() {
    assert!(matches!(primitive_for_episode(0), Primitive::Box { depth, .. } if depth == 0.02));
    assert!(matches!(primitive_for_episode(3), Primitive::Sphere { .. }));
    assert!(matches!(primitive_for_episode(4), Primitive::Octahedron { .. }));
    assert!(matches!(primitive_for_episode(6), Primitive::Cone { .. }));
    assert!(matches!(
        primitive_for_episode(7),
        Primitive::Torus { tubular_segments: 6, .. }
    ));
}

#[test]
fn linear_rgb_decodes_srgb_hex() {
    assert_eq!(linear_rgb(0x000000), [0.0, 0.0, 0.0]);
    let white = linear_rgb(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    let mid = linear_rgb(0x808080)[0];
    assert!((mid - 0.2159).abs() < 1e-3);
}

#[test]
fn materials_brighten_when_active() {
    let idle = episode_material(EpisodeKind::Narrative, 0.0);
    let active = episode_material(EpisodeKind::Narrative, 1.0);
    assert!((idle.emissive_intensity - 0.6).abs() < 1e-6);
    assert!((active.emissive_intensity - 2.0).abs() < 1e-6);
    assert_eq!(idle.roughness, 0.4);
    assert_eq!(idle.metalness, 0.05);

    let cameo = episode_material(EpisodeKind::CameoHunt, 1.0);
    assert!((cameo.emissive_intensity - 3.0).abs() < 1e-6);
    assert_eq!(cameo.base_color, cameo.emissive);
    assert_eq!(cameo.roughness, 0.25);
    assert_eq!(cameo.metalness, 0.2);
}

#[test]
fn objects_bob_spin_and_scale_up_when_active() {
    let home = Vec3::new(RING_RADIUS, 0.0, 0.0);
    let mut obj = EpisodeObject::new(0, home);
    obj.animate(1.0, 0.5, 0.0);
    let expected_y = (1.0 * BOB_FREQUENCY + home.x).sin() * BOB_AMPLITUDE;
    assert!((obj.position.y - expected_y).abs() < 1e-6);
    assert_eq!(obj.position.x, home.x);
    assert!((obj.yaw - 0.5 * IDLE_SPIN_PER_SEC).abs() < 1e-6);
    assert!((obj.scale - 1.0).abs() < 1e-6);

    for _ in 0..200 {
        obj.animate(2.0, 1.0 / 60.0, 1.0);
    }
    assert!((obj.scale - (1.0 + ACTIVE_SCALE_BOOST)).abs() < 1e-3);
}

#[test]
fn model_matrix_places_object() {
    let mut obj = EpisodeObject::new(1, Vec3::new(0.0, 0.0, RING_RADIUS));
    obj.animate(0.0, 0.0, 0.0);
    let origin = obj.model_matrix().transform_point3(Vec3::ZERO);
    assert!((origin - obj.position).length() < 1e-6);
}

#[test]
fn logo_mesh_faces_camera_around_y_and_stays_upright() {
    let cam = Camera::new(Vec3::new(3.0, 2.0, 4.0), Vec3::ZERO, 1.0);
    let m = logo_mesh_model(&cam);
    // authored lying flat: its face points down -Y and its top along +Z
    let facing = m.transform_vector3(-Vec3::Y).normalize();
    let to_cam = Vec3::new(cam.eye.x, 0.0, cam.eye.z).normalize();
    assert!((facing - to_cam).length() < 1e-4);
    let up = m.transform_vector3(Vec3::Z).normalize();
    assert!((up - Vec3::Y).length() < 1e-4);
    let scale = m.transform_vector3(Vec3::X).length();
    assert!((scale - LOGO_MODEL_SCALE).abs() < 1e-5);
}

#[test]
fn logo_mesh_yaw_tracks_camera_heading() {
    let side = Camera::new(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
    let facing = logo_mesh_model(&side).transform_vector3(-Vec3::Y).normalize();
    assert!((facing - Vec3::X).length() < 1e-4);
}

#[test]
fn logo_plane_copies_camera_orientation() {
    let cam = Camera::new(Vec3::new(0.0, 4.0, 3.0), Vec3::ZERO, 1.0);
    let m = logo_plane_model(&cam);
    let facing = m.transform_vector3(Vec3::Z).normalize();
    let to_cam = cam.eye.normalize();
    assert!((facing - to_cam).length() < 1e-4);
    let scale = m.transform_vector3(Vec3::X).length();
    assert!((scale - 1.0).abs() < 1e-5);
}

#[test]
fn logo_mesh_material_glows_cyan() {
    let m = logo_mesh_material([0.5, 0.5, 0.5], 0.3, 0.7);
    assert_eq!(m.emissive, linear_rgb(0x7be7ff));
    assert_eq!(m.emissive_intensity, 0.45);
    assert_eq!((m.roughness, m.metalness), (0.3, 0.7));
    assert_eq!(m.base_color, [0.5, 0.5, 0.5]);
}
