use crate::constants::TOOLTIP_DISTANCE_FACTOR;
use crate::core::{episode_at, Camera, ViewState, EPISODES};
use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const TITLE_ID: &str = "overlay-title";
pub const HINT_ID: &str = "overlay-hint";
pub const TOOLTIP_LAYER_ID: &str = "tooltip-layer";

/// Header title for the active stop.
pub fn header_title(active: Option<usize>) -> String {
    match active.and_then(episode_at) {
        Some(ep) => ep.header_title(),
        None => "3D Hub".to_string(),
    }
}

pub fn set_title(document: &web::Document, active: Option<usize>) {
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        el.set_text_content(Some(&header_title(active)));
    }
}

#[inline]
pub fn set_hint_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
        } else {
            _ = cl.add_1("hidden");
        }
    }
}

/// Screen labels pinned to the episode objects.
pub struct Tooltips {
    labels: Vec<web::HtmlElement>,
}

impl Tooltips {
    /// Create one label per episode inside the tooltip layer.
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let layer = crate::dom::element(document, TOOLTIP_LAYER_ID)?;
        let mut labels = Vec::with_capacity(EPISODES.len());
        for ep in EPISODES.iter() {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name("tooltip hidden");
            el.set_text_content(Some(ep.short));
            layer
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            labels.push(el.unchecked_into::<web::HtmlElement>());
        }
        Ok(Self { labels })
    }

    /// Position visible labels over their objects. `css_scale` converts backing
    /// pixels to CSS pixels.
    pub fn update(
        &self,
        view: &ViewState,
        camera: &Camera,
        positions: &[Vec3],
        width: f32,
        height: f32,
        css_scale: f32,
    ) {
        for (i, el) in self.labels.iter().enumerate() {
            let cl = el.class_list();
            let pos = positions.get(i).copied();
            let screen = pos.and_then(|p| camera.project(p, width, height));
            let (Some(p), Some(s), true) = (pos, screen, view.tooltip_visible(i)) else {
                _ = cl.add_1("hidden");
                continue;
            };
            _ = cl.remove_1("hidden");
            _ = cl.toggle_with_force("tooltip--active", view.active() == Some(i));
            let scale = camera.label_scale(p, TOOLTIP_DISTANCE_FACTOR);
            _ = el.style().set_property(
                "transform",
                &format!(
                    "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({:.3})",
                    s.x * css_scale,
                    s.y * css_scale,
                    scale
                ),
            );
        }
    }
}
