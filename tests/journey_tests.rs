// Host-side tests for the scroll journey: stops, bracketing and camera poses.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod hub {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod journey {
        include!("../src/core/journey.rs");
    }
}

use glam::Vec3;
use hub::constants::*;
use hub::journey::*;

const EPS: f32 = 1e-5;

#[test]
fn stops_start_at_hub_and_end_at_one() {
    let stops = build_stops(8, 0.1);
    assert_eq!(stops.len(), 9);
    assert_eq!(stops[0], 0.0);
    assert!((stops[1] - 0.1).abs() < EPS);
    assert!((stops[8] - 1.0).abs() < EPS);
    assert!((stops[2] - (0.1 + 0.9 / 7.0)).abs() < EPS);
}

#[test]
fn stops_are_strictly_increasing() {
    let stops = build_stops(EPISODE_COUNT, EPISODE_START_T);
    for w in stops.windows(2) {
        assert!(w[1] > w[0], "{:?} not increasing", w);
    }
}

#[test]
fn nearest_index_picks_minimum_distance() {
    let stops = build_stops(8, 0.1);
    assert_eq!(nearest_index(&stops, 0.0), 0);
    assert_eq!(nearest_index(&stops, 0.04), 0);
    assert_eq!(nearest_index(&stops, 0.06), 1);
    assert_eq!(nearest_index(&stops, 0.99), 8);
    assert_eq!(nearest_index(&stops, 0.5), 4); // 0.4857 beats 0.6143
}

#[test]
fn nearest_index_tie_goes_to_lower_index() {
    assert_eq!(nearest_index(&[0.0, 1.0], 0.5), 0);
    assert_eq!(nearest_index(&[0.2, 0.4, 0.6], 0.5), 1);
}

#[test]
fn nearest_index_of_empty_slice_is_zero() {
    assert_eq!(nearest_index(&[], 0.3), 0);
}

#[test]
fn bracket_finds_segment_and_fraction() {
    let stops = [0.0, 0.1, 0.5, 1.0];
    let seg = bracket(&stops, 0.3);
    assert_eq!((seg.from, seg.to), (1, 2));
    assert!((seg.frac - 0.5).abs() < EPS);

    let seg = bracket(&stops, 0.1);
    assert_eq!((seg.from, seg.to), (0, 1));
    assert!((seg.frac - 1.0).abs() < EPS);
}

#[test]
fn bracket_zero_width_segment_has_zero_fraction() {
    let seg = bracket(&[0.0, 0.5, 0.5, 1.0], 0.5);
    assert_eq!(seg.from, 0);
    let seg = bracket(&[0.5, 0.5], 0.5);
    assert_eq!(seg.frac, 0.0);
}

#[test]
fn bracket_out_of_range_pins_to_closer_end() {
    let stops = [0.0, 0.5, 1.0];
    let above = bracket(&stops, 1.5);
    assert_eq!((above.from, above.to, above.frac), (2, 2, 0.0));
    let below = bracket(&stops, -0.5);
    assert_eq!((below.from, below.to, below.frac), (0, 0, 0.0));
}

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0, 0.0, 1.0), 0.0);
    assert_eq!(smoothstep(1.0, 0.0, 1.0), 1.0);
    assert_eq!(smoothstep(-2.0, 0.0, 1.0), 0.0);
    assert_eq!(smoothstep(3.0, 0.0, 1.0), 1.0);
    assert!((smoothstep(0.5, 0.0, 1.0) - 0.5).abs() < EPS);
    assert!(smoothstep(0.25, 0.0, 1.0) < 0.25);
}

#[test]
fn damp_converges_and_is_frame_rate_independent() {
    assert_eq!(damp(0.0, 1.0, 10.0, 0.0), 0.0);
    let big_step = damp(0.0, 1.0, 10.0, 0.1);
    let mut small = 0.0;
    for _ in 0..10 {
        small = damp(small, 1.0, 10.0, 0.01);
    }
    assert!((big_step - small).abs() < 1e-4);
    assert!(damp(0.0, 1.0, 10.0, 5.0) > 0.999);
}

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-0.2), 0.0);
    assert_eq!(clamp01(1.7), 1.0);
    assert_eq!(clamp01(0.42), 0.42);
}

#[test]
fn episodes_sit_on_the_ring() {
    let layout = JourneyLayout::default();
    assert_eq!(layout.episode_count(), EPISODE_COUNT);
    for p in layout.episode_positions() {
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!((r - RING_RADIUS).abs() < 1e-4);
        assert_eq!(p.y, 0.0);
    }
    let first = layout.episode_positions()[0];
    assert!((first - Vec3::new(RING_RADIUS, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn poses_at_stops_match_precomputed_poses() {
    let layout = JourneyLayout::default();
    for (i, &t) in layout.stops().iter().enumerate() {
        let pose = layout.pose_at(t);
        let expected = layout.pose_for_stop(i);
        assert!((pose.eye - expected.eye).length() < 1e-4, "stop {}", i);
        assert!((pose.target - expected.target).length() < 1e-4, "stop {}", i);
    }
}

#[test]
fn hub_and_episode_pose_geometry() {
    let layout = JourneyLayout::default();
    let hub = layout.pose_for_stop(0);
    assert_eq!(hub.eye, HUB_CAMERA_POS);
    assert_eq!(hub.target, Vec3::ZERO);

    let p = layout.episode_positions()[2];
    let pose = layout.pose_for_stop(3);
    assert_eq!(pose.target, p);
    let expected_eye = p + p.normalize() * EPISODE_CAMERA_PULLBACK + Vec3::Y * EPISODE_CAMERA_LIFT;
    assert!((pose.eye - expected_eye).length() < 1e-4);
}

#[test]
fn pose_between_stops_is_eased_blend() {
    let layout = JourneyLayout::default();
    let stops = layout.stops();
    let mid = (stops[1] + stops[2]) * 0.5;
    let pose = layout.pose_at(mid);
    let a = layout.pose_for_stop(1);
    let b = layout.pose_for_stop(2);
    let expected = a.lerp(&b, 0.5);
    assert!((pose.eye - expected.eye).length() < 1e-3);
}

#[test]
fn active_episode_follows_nearest_stop() {
    let layout = JourneyLayout::default();
    assert_eq!(layout.active_episode(0.0), None);
    assert_eq!(layout.active_episode(0.04), None);
    assert_eq!(layout.active_episode(0.1), Some(0));
    assert_eq!(layout.active_episode(1.0), Some(7));
}

#[test]
fn stop_for_episode_skips_hub() {
    let layout = JourneyLayout::default();
    assert_eq!(layout.stop_for_episode(0), Some(layout.stops()[1]));
    assert_eq!(layout.stop_for_episode(7), Some(layout.stops()[8]));
    assert_eq!(layout.stop_for_episode(8), None);
}

#[test]
fn out_of_range_stop_index_falls_back_to_hub() {
    let layout = JourneyLayout::default();
    assert_eq!(layout.pose_for_stop(99), layout.pose_for_stop(0));
}
