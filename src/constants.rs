// Frame, camera-follow and interaction tuning for the web front-end.
//
// Layout and scroll tuning shared with the pure journey code lives in
// `core::constants`.

// Autopilot follow rates (per second, exponential)
pub const CAMERA_FOLLOW_RATE: f32 = 8.0;
pub const TARGET_FOLLOW_RATE: f32 = 10.0;

// Clamp on frame delta so a backgrounded tab does not teleport the camera
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Rendering
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.25;
pub const LOGO_TEXTURE_URL: &str = "/n9ne-logo.jpg";
pub const LOGO_MODEL_URL: &str = "/9-logo.glb";
pub const LOGO_PLACEHOLDER_SIZE: u32 = 256;

// Pointer
pub const DRAG_THRESHOLD_PX: f32 = 4.0; // movement before a press becomes an orbit drag
pub const PICK_RADIUS_PADDING: f32 = 0.08; // added to the primitive bounds when picking

// Wheel deltaMode scaling (line and page modes)
pub const WHEEL_LINE_PX: f32 = 16.0;

// Labels
pub const TOOLTIP_DISTANCE_FACTOR: f32 = 6.0;
