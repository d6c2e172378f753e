use glam::{Vec2, Vec3};
use web_sys as web;

/// Last known hover position in canvas backing pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub over_canvas: bool,
}

/// A pointer press that may turn into an orbit drag once it moves far enough.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub pointer_id: i32,
    pub pressed: bool,
    pub dragging: bool,
    pub orbit_allowed: bool,
    pub start: Vec2,
    pub last: Vec2,
}

impl DragState {
    pub fn press(&mut self, pointer_id: i32, at: Vec2, orbit_allowed: bool) {
        *self = DragState {
            pointer_id,
            pressed: true,
            dragging: false,
            orbit_allowed,
            start: at,
            last: at,
        };
    }

    /// Record a move. Past the threshold the press stops being a click; the
    /// orbit delta is only returned for presses that may orbit.
    pub fn moved(&mut self, at: Vec2, threshold_px: f32) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        if !self.dragging && at.distance(self.start) < threshold_px {
            return None;
        }
        self.dragging = true;
        let delta = at - self.last;
        self.last = at;
        self.orbit_allowed.then_some(delta)
    }

    /// End the press; returns true when it was a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let was_click = self.pressed && !self.dragging;
        self.pressed = false;
        self.dragging = false;
        was_click
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Closest sphere hit along the ray; `spheres` holds `(center, radius)`.
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, spheres: &[(Vec3, f32)]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, *radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Wheel delta in CSS pixels regardless of `deltaMode` (0 px, 1 line, 2 page).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * line_px,
        2 => d * page_px,
        _ => d,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyNav {
    Step(i32),
    Hub,
    Last,
    ClosePanel,
}

#[inline]
pub fn nav_for_key(key: &str) -> Option<KeyNav> {
    match key {
        "ArrowDown" | "ArrowRight" | "PageDown" => Some(KeyNav::Step(1)),
        "ArrowUp" | "ArrowLeft" | "PageUp" => Some(KeyNav::Step(-1)),
        "Home" => Some(KeyNav::Hub),
        "End" => Some(KeyNav::Last),
        "Escape" => Some(KeyNav::ClosePanel),
        _ => None,
    }
}
