use super::constants::*;
use super::journey::{clamp01, damp, nearest_index};

/// Input-to-progress tuning; defaults mirror the shipped feel.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTuning {
    pub wheel_speed: f32,
    pub touch_speed: f32,
    pub wheel_snap_delay_ms: f64,
    pub touch_move_snap_delay_ms: f64,
    pub touch_end_snap_delay_ms: f64,
    pub damping: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            wheel_speed: WHEEL_SPEED,
            touch_speed: TOUCH_SPEED,
            wheel_snap_delay_ms: WHEEL_SNAP_DELAY_MS,
            touch_move_snap_delay_ms: TOUCH_MOVE_SNAP_DELAY_MS,
            touch_end_snap_delay_ms: TOUCH_END_SNAP_DELAY_MS,
            damping: PROGRESS_DAMPING,
        }
    }
}

/// Maps wheel and touch deltas to a clamped target progress, smooths the
/// current progress toward it and snaps to the nearest stop once input pauses.
///
/// The snap timer is a deadline polled by the frame loop; re-arming it
/// replaces the previous deadline.
#[derive(Clone, Debug)]
pub struct ProgressController {
    current: f32,
    target: f32,
    moving: bool,
    hint_visible: bool,
    touch_anchor_y: Option<f32>,
    snap_due_ms: Option<f64>,
    tuning: ScrollTuning,
}

impl Default for ProgressController {
    fn default() -> Self {
        Self::new(ScrollTuning::default())
    }
}

impl ProgressController {
    pub fn new(tuning: ScrollTuning) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            moving: false,
            hint_visible: true,
            touch_anchor_y: None,
            snap_due_ms: None,
            tuning,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }
    #[inline]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }
    #[inline]
    pub fn snap_pending(&self) -> bool {
        self.snap_due_ms.is_some()
    }

    fn nudge(&mut self, delta: f32) {
        self.hint_visible = false;
        self.moving = true;
        self.target = clamp01(self.target + delta);
    }

    fn arm_snap(&mut self, now_ms: f64, delay_ms: f64) {
        self.snap_due_ms = Some(now_ms + delay_ms);
    }

    /// Wheel delta in CSS pixels (positive scrolls forward).
    pub fn wheel(&mut self, delta_y: f32, now_ms: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.nudge(delta_y * self.tuning.wheel_speed);
        self.arm_snap(now_ms, self.tuning.wheel_snap_delay_ms);
    }

    pub fn touch_start(&mut self, touch_count: u32, y: f32) {
        if touch_count != 1 {
            return;
        }
        self.touch_anchor_y = Some(y);
    }

    pub fn touch_move(&mut self, touch_count: u32, y: f32, now_ms: f64) {
        let Some(anchor) = self.touch_anchor_y else {
            return;
        };
        if touch_count != 1 {
            return;
        }
        let dy = anchor - y;
        self.touch_anchor_y = Some(y);
        self.nudge(dy * self.tuning.touch_speed);
        self.arm_snap(now_ms, self.tuning.touch_move_snap_delay_ms);
    }

    pub fn touch_end(&mut self, now_ms: f64) {
        self.touch_anchor_y = None;
        self.arm_snap(now_ms, self.tuning.touch_end_snap_delay_ms);
    }

    /// Jump the target straight to `t` (clamped), e.g. when an object is clicked.
    pub fn jump_to(&mut self, t: f32) {
        self.target = clamp01(t);
        self.hint_visible = false;
    }

    /// Move the target to the stop `delta` places away from the nearest one.
    pub fn step(&mut self, delta: i32, stops: &[f32]) {
        if stops.is_empty() {
            return;
        }
        let from = nearest_index(stops, self.target) as i64;
        let to = (from + delta as i64).clamp(0, stops.len() as i64 - 1) as usize;
        self.jump_to(stops[to]);
        self.snap_due_ms = None;
        self.moving = false;
    }

    /// Fire the pending snap if its deadline has passed. Returns the stop snapped to.
    pub fn poll_snap(&mut self, now_ms: f64, stops: &[f32]) -> Option<usize> {
        match self.snap_due_ms {
            Some(due) if now_ms >= due => {
                self.snap_due_ms = None;
                self.moving = false;
                if stops.is_empty() {
                    return None;
                }
                let idx = nearest_index(stops, self.target);
                self.target = stops[idx];
                log::debug!("[input] snapped to stop {} (t={:.3})", idx, self.target);
                Some(idx)
            }
            _ => None,
        }
    }

    /// Smooth the current progress toward the target.
    pub fn advance(&mut self, dt_sec: f32) {
        self.current = clamp01(damp(self.current, self.target, self.tuning.damping, dt_sec));
    }
}
