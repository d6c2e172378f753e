mod keyboard;
mod pointer;
mod scroll;

use crate::core::{CameraRig, JourneyLayout, ViewState};
use crate::input;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every input listener needs.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub view: Rc<RefCell<ViewState>>,
    pub layout: Rc<JourneyLayout>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub drag: Rc<RefCell<input::DragState>>,
    /// Pick spheres `(center, radius)` per episode, refreshed every frame.
    pub pick_spheres: Rc<RefCell<Vec<(Vec3, f32)>>>,
}

impl InputWiring {
    /// Episode object under a canvas pixel, if any.
    pub fn pick_at(&self, px: Vec2) -> Option<usize> {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        let camera = self.rig.borrow().camera(w / h.max(1.0));
        let (ro, rd) = camera.screen_ray(px.x, px.y, w, h);
        input::pick_nearest(ro, rd, &self.pick_spheres.borrow())
    }

    pub fn select_episode(&self, index: usize) {
        let mut view = self.view.borrow_mut();
        view.select_episode(index, &self.layout);
        log::info!("[input] selected episode {}", index);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    scroll::wire_scroll(&w);
    pointer::wire_pointer(&w);
    keyboard::wire_keyboard(&w);
}
