// Host-side tests for the camera, orbit limits and the manual override window.

#![allow(dead_code)]
mod hub {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod journey {
        include!("../src/core/journey.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use glam::Vec3;
use hub::camera::*;
use hub::constants::*;
use hub::journey::{CameraPose, JourneyLayout};

fn polar(eye: Vec3, target: Vec3) -> f32 {
    let o = eye - target;
    (o.y / o.length()).acos()
}

const RATES: FollowRates = FollowRates {
    eye: 8.0,
    target: 10.0,
};

#[test]
fn camera_uses_hub_projection_settings() {
    let cam = Camera::new(HUB_CAMERA_POS, Vec3::ZERO, 1.5);
    assert!((cam.fovy_radians - 65f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, 0.1);
    assert_eq!(cam.zfar, 100.0);
}

#[test]
fn center_ray_points_at_target() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);
    let (ro, rd) = cam.screen_ray(50.0, 50.0, 100.0, 100.0);
    assert_eq!(ro, cam.eye);
    assert!((rd - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn project_inverts_screen_ray() {
    let cam = Camera::new(HUB_CAMERA_POS, Vec3::ZERO, 16.0 / 9.0);
    let (w, h) = (1600.0, 900.0);
    let (ro, rd) = cam.screen_ray(400.0, 300.0, w, h);
    let world = ro + rd * 4.0;
    let px = cam.project(world, w, h).expect("point is in front of the camera");
    assert!((px.x - 400.0).abs() < 0.5);
    assert!((px.y - 300.0).abs() < 0.5);
}

#[test]
fn project_rejects_points_behind_camera() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);
    assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), 100.0, 100.0).is_none());
}

#[test]
fn label_scale_shrinks_with_distance() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);
    let near = cam.label_scale(Vec3::new(0.0, 0.0, 3.0), 6.0);
    let far = cam.label_scale(Vec3::new(0.0, 0.0, -3.0), 6.0);
    assert!(near > far);
    assert!((near / far - 4.0).abs() < 1e-3);
}

#[test]
fn orientation_looks_down_negative_z_toward_target() {
    let cam = Camera::new(Vec3::new(3.0, 1.0, 2.0), Vec3::ZERO, 1.0);
    let forward = cam.orientation() * Vec3::NEG_Z;
    let expected = (cam.target - cam.eye).normalize();
    assert!((forward - expected).length() < 1e-4);
}

#[test]
fn orbit_keeps_radius_and_polar_band() {
    let limits = OrbitLimits::default();
    let target = Vec3::ZERO;
    let mut eye = HUB_CAMERA_POS;
    let radius = eye.length();
    for (dx, dy) in [(40.0, 0.0), (0.0, 900.0), (-300.0, -2000.0), (10.0, 5000.0)] {
        eye = orbit(eye, target, dx, dy, 800.0, &limits);
        assert!((eye.length() - radius).abs() < 1e-3);
        let phi = polar(eye, target);
        assert!(phi >= ORBIT_MIN_POLAR - 1e-4 && phi <= ORBIT_MAX_POLAR + 1e-4, "phi={}", phi);
    }
}

#[test]
fn orbit_angle_scales_with_viewport_height() {
    let limits = OrbitLimits::default();
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let rotated = orbit(eye, Vec3::ZERO, 100.0, 0.0, 1000.0, &limits);
    let expected = std::f32::consts::TAU * 100.0 / 1000.0 * ORBIT_ROTATE_SPEED;
    let angle = eye.angle_between(rotated);
    assert!((angle - expected).abs() < 1e-3);
}

#[test]
fn constrain_polar_pulls_top_down_view_into_band() {
    let limits = OrbitLimits::default();
    let eye = constrain_polar(Vec3::new(0.0, 5.0, 0.01), Vec3::ZERO, &limits);
    let phi = polar(eye, Vec3::ZERO);
    assert!((phi - ORBIT_MIN_POLAR).abs() < 1e-3);
}

#[test]
fn manual_override_expires_after_window() {
    let mut m = ManualOverride::default();
    m.engage(1000.0, MANUAL_OVERRIDE_MS);
    assert!(m.is_active(1000.0));
    assert!(m.is_active(1000.0 + MANUAL_OVERRIDE_MS));
    assert!(!m.is_active(1000.0 + MANUAL_OVERRIDE_MS + 1.0));
}

#[test]
fn manual_override_keeps_latest_deadline() {
    let mut m = ManualOverride::default();
    m.engage(1000.0, 900.0);
    m.engage(500.0, 900.0);
    assert!(m.is_active(1850.0));
    m.engage(1500.0, 900.0);
    assert!(m.is_active(2350.0));
}

#[test]
fn rig_follows_pose_until_dragged() {
    let layout = JourneyLayout::default();
    let desired = layout.pose_for_stop(1);
    let mut rig = CameraRig::default();
    let start = rig.eye;
    assert!(rig.follow(&desired, 0.016, 0.0, RATES));
    assert!((rig.eye - desired.eye).length() < (start - desired.eye).length());

    rig.drag(30.0, 0.0, 800.0, 100.0, MANUAL_OVERRIDE_MS);
    let held = rig.eye;
    assert!(!rig.follow(&desired, 0.016, 500.0, RATES));
    assert_eq!(rig.eye, held);
    assert!(rig.follow(&desired, 0.016, 100.0 + MANUAL_OVERRIDE_MS + 1.0, RATES));
}

#[test]
fn rig_converges_on_still_pose() {
    let desired = CameraPose {
        eye: Vec3::new(4.5, 0.65, 0.0),
        target: Vec3::new(2.5, 0.0, 0.0),
    };
    let mut rig = CameraRig::default();
    for i in 0..600 {
        rig.follow(&desired, 1.0 / 60.0, i as f64 * 16.0, RATES);
    }
    assert!((rig.target - desired.target).length() < 1e-3);
    assert!((rig.eye - desired.eye).length() < 0.05);
}
