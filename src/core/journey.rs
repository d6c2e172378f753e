use super::constants::*;
use glam::Vec3;

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Frame-rate independent exponential smoothing of `current` toward `target`.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    let t = 1.0 - (-lambda * dt).exp();
    current + (target - current) * t
}

#[inline]
pub fn smoothstep(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let x = (x - min) / (max - min);
    x * x * (3.0 - 2.0 * x)
}

/// Hub stop at 0 followed by one evenly spaced stop per episode, starting at
/// `start_t` and ending at 1.
pub fn build_stops(episode_count: usize, start_t: f32) -> Vec<f32> {
    let span = (episode_count.max(2) - 1) as f32;
    let mut stops = Vec::with_capacity(episode_count + 1);
    stops.push(0.0);
    for i in 0..episode_count {
        stops.push(start_t + (1.0 - start_t) * (i as f32 / span));
    }
    stops
}

/// Index of the value closest to `x`; the lower index wins a tie.
#[inline]
pub fn nearest_index(values: &[f32], x: f32) -> usize {
    let mut best_i = 0usize;
    let mut best_d = f32::INFINITY;
    for (i, v) in values.iter().enumerate() {
        let d = (v - x).abs();
        if d < best_d {
            best_d = d;
            best_i = i;
        }
    }
    best_i
}

/// Pair of stops bracketing a progress value and the fraction travelled between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub frac: f32,
}

pub fn bracket(stops: &[f32], t: f32) -> Segment {
    for i in 0..stops.len().saturating_sub(1) {
        let (a, b) = (stops[i], stops[i + 1]);
        if t >= a && t <= b {
            let frac = if b == a { 0.0 } else { (t - a) / (b - a) };
            return Segment {
                from: i,
                to: i + 1,
                frac,
            };
        }
    }
    // Out of range: pin to whichever end is closer.
    let last = stops.len().saturating_sub(1);
    let idx = match stops.last() {
        Some(&end) if t > end => last,
        _ => 0,
    };
    Segment {
        from: idx,
        to: idx,
        frac: 0.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    #[inline]
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            eye: self.eye.lerp(other.eye, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

/// Precomputed stops, episode anchors and camera poses for the scroll journey.
#[derive(Clone, Debug)]
pub struct JourneyLayout {
    stops: Vec<f32>,
    episode_positions: Vec<Vec3>,
    hub_pose: CameraPose,
    episode_poses: Vec<CameraPose>,
}

impl Default for JourneyLayout {
    fn default() -> Self {
        Self::new(EPISODE_COUNT)
    }
}

impl JourneyLayout {
    pub fn new(episode_count: usize) -> Self {
        let stops = build_stops(episode_count, EPISODE_START_T);
        let episode_positions: Vec<Vec3> = (0..episode_count)
            .map(|i| {
                let angle = (i as f32 / episode_count as f32) * std::f32::consts::TAU;
                Vec3::new(RING_RADIUS * angle.cos(), 0.0, RING_RADIUS * angle.sin())
            })
            .collect();
        let episode_poses = episode_positions
            .iter()
            .map(|&p| CameraPose {
                eye: p
                    + p.normalize_or_zero() * EPISODE_CAMERA_PULLBACK
                    + Vec3::new(0.0, EPISODE_CAMERA_LIFT, 0.0),
                target: p,
            })
            .collect();
        log::debug!(
            "[journey] {} stops, last={:.3}",
            stops.len(),
            stops.last().copied().unwrap_or(0.0)
        );
        Self {
            stops,
            episode_positions,
            hub_pose: CameraPose {
                eye: HUB_CAMERA_POS,
                target: HUB_TARGET,
            },
            episode_poses,
        }
    }

    #[inline]
    pub fn stops(&self) -> &[f32] {
        &self.stops
    }

    #[inline]
    pub fn episode_positions(&self) -> &[Vec3] {
        &self.episode_positions
    }

    #[inline]
    pub fn episode_count(&self) -> usize {
        self.episode_positions.len()
    }

    /// Progress value of an episode's stop.
    #[inline]
    pub fn stop_for_episode(&self, episode: usize) -> Option<f32> {
        self.stops.get(episode + 1).copied()
    }

    /// Camera pose at a stop index; 0 is the hub.
    pub fn pose_for_stop(&self, stop: usize) -> CameraPose {
        match stop.checked_sub(1) {
            None => self.hub_pose,
            Some(ep) => self.episode_poses.get(ep).copied().unwrap_or(self.hub_pose),
        }
    }

    #[inline]
    pub fn nearest_stop(&self, t: f32) -> usize {
        nearest_index(&self.stops, t)
    }

    /// Episode whose stop is closest to `t`, or `None` when the hub is closest.
    #[inline]
    pub fn active_episode(&self, t: f32) -> Option<usize> {
        self.nearest_stop(t).checked_sub(1)
    }

    /// Camera pose for a progress value, eased between the bracketing stops.
    pub fn pose_at(&self, t: f32) -> CameraPose {
        let seg = bracket(&self.stops, t);
        let eased = smoothstep(seg.frac, 0.0, 1.0);
        self.pose_for_stop(seg.from)
            .lerp(&self.pose_for_stop(seg.to), eased)
    }
}
