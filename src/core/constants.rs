use glam::Vec3;

// Scene layout and scroll tuning shared by the journey, the renderer and the input layer.

// Journey layout
pub const EPISODE_COUNT: usize = 8;
pub const EPISODE_START_T: f32 = 0.1; // progress of the first episode stop; hub sits at 0
pub const RING_RADIUS: f32 = 2.5; // episodes sit on a circle of this radius in the XZ plane

// Camera poses
pub const HUB_CAMERA_POS: Vec3 = Vec3::new(0.0, 1.2, 6.5);
pub const HUB_TARGET: Vec3 = Vec3::ZERO;
pub const EPISODE_CAMERA_PULLBACK: f32 = 2.1; // outward distance from the episode
pub const EPISODE_CAMERA_LIFT: f32 = 0.65;

// Lens
pub const CAMERA_FOV_DEG: f32 = 65.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls (zoom and pan are disabled)
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::FRAC_PI_3;
pub const ORBIT_MAX_POLAR: f32 = 2.0 * std::f32::consts::FRAC_PI_3;
pub const ORBIT_ROTATE_SPEED: f32 = 0.6;
pub const MANUAL_OVERRIDE_MS: f64 = 900.0;

// Scroll tuning
pub const WHEEL_SPEED: f32 = 0.00065; // progress per wheel pixel
pub const TOUCH_SPEED: f32 = 0.0012; // progress per touch pixel
pub const WHEEL_SNAP_DELAY_MS: f64 = 220.0;
pub const TOUCH_MOVE_SNAP_DELAY_MS: f64 = 250.0;
pub const TOUCH_END_SNAP_DELAY_MS: f64 = 120.0;
pub const PROGRESS_DAMPING: f32 = 10.0;

// Episode object animation
pub const BOB_FREQUENCY: f32 = 0.8;
pub const BOB_AMPLITUDE: f32 = 0.12;
pub const IDLE_SPIN_PER_SEC: f32 = 0.35;
pub const ACTIVE_SCALE_BOOST: f32 = 0.18;
pub const SCALE_DAMPING: f32 = 14.0;

// Hub logo: textured plane while the model streams in, then the model
pub const LOGO_PLANE_SIZE: f32 = 2.2;
pub const LOGO_PLANE_EMISSIVE_INTENSITY: f32 = 0.35;
pub const LOGO_MODEL_SCALE: f32 = 1.05;
pub const LOGO_MODEL_BASE_PITCH: f32 = -std::f32::consts::FRAC_PI_2; // authored lying flat
pub const LOGO_MODEL_EMISSIVE_HEX: u32 = 0x7be7ff;
pub const LOGO_MODEL_EMISSIVE_INTENSITY: f32 = 0.45;

// Palette (sRGB hex)
pub const NARRATIVE_BASE_HEX: u32 = 0xe8f7ff;
pub const NARRATIVE_EMISSIVE_HEX: u32 = 0x7be7ff;
pub const CAMEO_HEX: u32 = 0xffb84d;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.55;
pub const POINT_LIGHT_POS: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const POINT_LIGHT_INTENSITY: f32 = 55.0;
pub const POINT_LIGHT_HEX: u32 = 0x7be7ff;

// Backdrop gradient stops (sRGB hex, position)
pub const BACKDROP_STOPS: [(u32, f32); 3] = [(0x141b32, 0.0), (0x05060a, 0.52), (0x020308, 1.0)];
pub const STARFIELD_SEED: u64 = 9;
pub const STARFIELD_SIZE: u32 = 512;
pub const STARFIELD_STARS: usize = 420;
