use super::InputWiring;
use crate::constants::WHEEL_LINE_PX;
use crate::dom::{add_passive_listener, now_ms};
use crate::input::wheel_delta_px;
use web_sys as web;

pub(super) fn wire_scroll(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    let view = w.view.clone();
    let wnd = window.clone();
    add_passive_listener(target, "wheel", move |ev: web::WheelEvent| {
        let page_px = wnd
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let delta = wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, page_px);
        view.borrow_mut().progress.wheel(delta, now_ms());
    });

    let view = w.view.clone();
    add_passive_listener(target, "touchstart", move |ev: web::TouchEvent| {
        let touches = ev.touches();
        if let Some(t) = touches.get(0) {
            view.borrow_mut()
                .progress
                .touch_start(touches.length(), t.client_y() as f32);
        }
    });

    let view = w.view.clone();
    add_passive_listener(target, "touchmove", move |ev: web::TouchEvent| {
        let touches = ev.touches();
        if let Some(t) = touches.get(0) {
            view.borrow_mut()
                .progress
                .touch_move(touches.length(), t.client_y() as f32, now_ms());
        }
    });

    let view = w.view.clone();
    add_passive_listener(target, "touchend", move |_ev: web::TouchEvent| {
        view.borrow_mut().progress.touch_end(now_ms());
    });
}
