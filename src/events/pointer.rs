use super::InputWiring;
use crate::constants::DRAG_THRESHOLD_PX;
use crate::core::MANUAL_OVERRIDE_MS;
use crate::dom::now_ms;
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_pointer(w: &InputWiring) {
    wire_pointermove(w);
    wire_pointerdown(w);
    wire_pointerup(w);
    wire_pointerleave(w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() == "mouse" {
            let pos = input::pointer_canvas_px(&ev, &w.canvas);
            let mut ms = w.mouse.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
            ms.over_canvas = pos.x >= 0.0
                && pos.y >= 0.0
                && pos.x <= w.canvas.width() as f32
                && pos.y <= w.canvas.height() as f32;
        }

        let delta = {
            let mut ds = w.drag.borrow_mut();
            if ds.pointer_id != ev.pointer_id() {
                return;
            }
            ds.moved(client_pos(&ev), DRAG_THRESHOLD_PX)
        };
        if let Some(d) = delta {
            let viewport_h = w.canvas.client_height() as f32;
            w.rig
                .borrow_mut()
                .drag(d.x, d.y, viewport_h, now_ms(), MANUAL_OVERRIDE_MS);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() > 0 {
            return;
        }
        // touch drags drive the scroll journey, not the orbit
        let orbit_allowed = ev.pointer_type() != "touch";
        w.drag
            .borrow_mut()
            .press(ev.pointer_id(), client_pos(&ev), orbit_allowed);
        if orbit_allowed {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = {
            let mut ds = w.drag.borrow_mut();
            if !ds.pressed || ds.pointer_id != ev.pointer_id() {
                return;
            }
            ds.release()
        };
        if !was_click {
            log::debug!("[input] orbit drag ended");
            return;
        }
        if ev.type_() == "pointercancel" {
            return;
        }
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        if let Some(i) = w.pick_at(px) {
            w.select_episode(i);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let mouse = w.mouse.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        mouse.borrow_mut().over_canvas = false;
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
