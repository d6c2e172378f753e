use super::constants::*;
use super::journey::CameraPose;
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space orientation of the camera (its -Z looks at the target).
    pub fn orientation(&self) -> Quat {
        let (_, rot, _) = self.view_matrix().inverse().to_scale_rotation_translation();
        rot
    }

    /// World-space ray through a pixel of a `width`x`height` viewport.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }

    /// Pixel position of a world point, or `None` when it lies behind the camera.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (1.0 - (ndc.y * 0.5 + 0.5)) * height,
        ))
    }

    /// CSS scale for a screen label pinned to `world`, shrinking with distance.
    pub fn label_scale(&self, world: Vec3, distance_factor: f32) -> f32 {
        let dist = (world - self.eye).length().max(1e-3);
        let object_scale = 1.0 / (2.0 * (self.fovy_radians * 0.5).tan() * dist);
        object_scale * distance_factor
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitLimits {
    pub min_polar: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }
}

const POLAR_EPS: f32 = 1e-6;

fn to_spherical(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = offset.x.atan2(offset.z);
    let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
    (radius, theta, phi)
}

fn from_spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let s = phi.sin();
    Vec3::new(radius * s * theta.sin(), radius * phi.cos(), radius * s * theta.cos())
}

/// Rotate `eye` around `target` by a pointer drag of `(dx, dy)` pixels.
pub fn orbit(
    eye: Vec3,
    target: Vec3,
    dx: f32,
    dy: f32,
    viewport_h: f32,
    limits: &OrbitLimits,
) -> Vec3 {
    let (radius, theta, phi) = to_spherical(eye - target);
    let h = viewport_h.max(1.0);
    let k = std::f32::consts::TAU * limits.rotate_speed / h;
    let theta = theta - dx * k;
    let phi = clamp_polar(phi - dy * k, limits);
    target + from_spherical(radius, theta, phi)
}

/// Keep `eye` inside the allowed polar band around `target`.
pub fn constrain_polar(eye: Vec3, target: Vec3, limits: &OrbitLimits) -> Vec3 {
    let (radius, theta, phi) = to_spherical(eye - target);
    if radius == 0.0 {
        return eye;
    }
    target + from_spherical(radius, theta, clamp_polar(phi, limits))
}

#[inline]
fn clamp_polar(phi: f32, limits: &OrbitLimits) -> f32 {
    phi.clamp(limits.min_polar, limits.max_polar)
        .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS)
}

/// Window during which a manual drag suspends autopilot.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualOverride {
    until_ms: f64,
}

impl ManualOverride {
    #[inline]
    pub fn engage(&mut self, now_ms: f64, window_ms: f64) {
        self.until_ms = self.until_ms.max(now_ms + window_ms);
    }
    #[inline]
    pub fn is_active(&self, now_ms: f64) -> bool {
        now_ms <= self.until_ms
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FollowRates {
    pub eye: f32,
    pub target: f32,
}

/// Live camera state: eased toward the journey pose unless the user is dragging.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub limits: OrbitLimits,
    manual: ManualOverride,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: HUB_CAMERA_POS,
            target: HUB_TARGET,
            limits: OrbitLimits::default(),
            manual: ManualOverride::default(),
        }
    }
}

impl CameraRig {
    #[inline]
    pub fn autopilot(&self, now_ms: f64) -> bool {
        !self.manual.is_active(now_ms)
    }

    /// Ease toward `desired`. Returns false while a manual override holds the camera.
    pub fn follow(
        &mut self,
        desired: &CameraPose,
        dt_sec: f32,
        now_ms: f64,
        rates: FollowRates,
    ) -> bool {
        if !self.autopilot(now_ms) {
            return false;
        }
        self.eye = self.eye.lerp(desired.eye, 1.0 - (-rates.eye * dt_sec).exp());
        self.target = self
            .target
            .lerp(desired.target, 1.0 - (-rates.target * dt_sec).exp());
        self.eye = constrain_polar(self.eye, self.target, &self.limits);
        true
    }

    /// Apply a pointer drag and hold off autopilot for `window_ms`.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_h: f32, now_ms: f64, window_ms: f64) {
        self.manual.engage(now_ms, window_ms);
        self.eye = orbit(self.eye, self.target, dx, dy, viewport_h, &self.limits);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::new(self.eye, self.target, aspect)
    }
}
