#![cfg(target_arch = "wasm32")]
use crate::core::model::{load_logo_mesh, LogoMesh};
use crate::core::texture::{decode_image, RgbaImage};
use crate::core::HubError;
use crate::core::{CameraRig, EpisodeObject, JourneyLayout, ViewState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod core;
mod diagnostic;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod panel;
mod render;

const CANVAS_ID: &str = "hub-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    diagnostic::install_panic_hook();
    console_log::init_with_level(config::log_level()).ok();
    log::info!("n9ne-hub starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            diagnostic::show(&format!("{:?}", e));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ID, e)))?;
    dom::wire_canvas_resize(&canvas);

    // ---------------- Shared state ----------------
    let layout = Rc::new(JourneyLayout::default());
    let view = Rc::new(RefCell::new(ViewState::default()));
    let rig = Rc::new(RefCell::new(CameraRig::default()));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));
    let pick_spheres = Rc::new(RefCell::new(Vec::with_capacity(layout.episode_count())));
    let pending_logo: Rc<RefCell<Option<RgbaImage>>> = Rc::new(RefCell::new(None));
    let pending_model: Rc<RefCell<Option<LogoMesh>>> = Rc::new(RefCell::new(None));

    {
        let view_mq = view.clone();
        let coarse = dom::watch_coarse_pointer(move |coarse| {
            view_mq.borrow_mut().coarse_pointer = coarse;
        });
        view.borrow_mut().coarse_pointer = coarse;
    }

    let view_close = view.clone();
    panel::wire_close(&document, move || view_close.borrow_mut().close_panel())?;
    let tooltips = match overlay::Tooltips::new(&document) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[ui] tooltips disabled: {:?}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas, &layout).await?;

    spawn_local(load_asset(constants::LOGO_TEXTURE_URL, decode_image, pending_logo.clone()));
    spawn_local(load_asset(constants::LOGO_MODEL_URL, load_logo_mesh, pending_model.clone()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        view: view.clone(),
        layout: layout.clone(),
        rig: rig.clone(),
        mouse: mouse.clone(),
        drag,
        pick_spheres: pick_spheres.clone(),
    });

    let objects = layout
        .episode_positions()
        .iter()
        .enumerate()
        .map(|(i, p)| EpisodeObject::new(i, *p))
        .collect();
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        view,
        layout,
        rig,
        mouse,
        pick_spheres,
        objects,
        canvas,
        document,
        tooltips,
        gpu: Some(gpu),
        pending_logo,
        pending_model,
        start_instant: now,
        last_instant: now,
        last_ui: None,
        last_hovered: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Fetch and decode one logo asset into `slot`; failures keep whatever is
/// already on screen.
async fn load_asset<T: 'static>(
    url: &'static str,
    decode: fn(&[u8]) -> Result<T, HubError>,
    slot: Rc<RefCell<Option<T>>>,
) {
    let result = async {
        let bytes = dom::fetch_bytes(url).await?;
        Ok::<_, anyhow::Error>(decode(&bytes)?)
    }
    .await;
    match result {
        Ok(asset) => {
            log::info!("[logo] loaded {}", url);
            *slot.borrow_mut() = Some(asset);
        }
        Err(e) => log::warn!("[logo] {} unavailable, keeping fallback: {:?}", url, e),
    }
}
