use super::InputWiring;
use crate::input::{nav_for_key, KeyNav};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
        return;
    }
    let Some(nav) = nav_for_key(&ev.key()) else {
        return;
    };
    let stops = w.layout.stops();
    let mut view = w.view.borrow_mut();
    match nav {
        KeyNav::Step(delta) => view.progress.step(delta, stops),
        KeyNav::Hub => view.progress.step(-(stops.len() as i32), stops),
        KeyNav::Last => view.progress.step(stops.len() as i32, stops),
        KeyNav::ClosePanel => {
            view.close_panel();
            return;
        }
    }
    log::debug!("[keys] {:?} -> target={:.3}", nav, view.progress.target());
    ev.prevent_default();
}

pub(super) fn wire_keyboard(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &w);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
