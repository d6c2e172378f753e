use crate::core::Episode;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PANEL_ID: &str = "detail-panel";
const COMPACT_CLASS: &str = "detail-panel--compact";

fn el(
    document: &web::Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let e = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if let Some(c) = class {
        e.set_class_name(c);
    }
    if text.is_some() {
        e.set_text_content(text);
    }
    Ok(e)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Rebuild the panel for `episode`, or hide it when there is none.
pub fn render(
    document: &web::Document,
    episode: Option<&Episode>,
    compact: bool,
) -> anyhow::Result<()> {
    let panel = crate::dom::element(document, PANEL_ID)?;
    panel.set_inner_html("");
    let Some(ep) = episode else {
        _ = panel.class_list().add_1("hidden");
        return Ok(());
    };
    _ = panel.class_list().remove_1("hidden");
    set_compact(document, compact);

    let top = el(document, "div", Some("detail-panel__top"), None)?;
    append(&top, &el(document, "div", Some("ep-tag"), Some(ep.tag()))?)?;
    let close = el(document, "button", Some("close-btn"), Some("×"))?;
    _ = close.set_attribute("aria-label", "Close");
    _ = close.set_attribute("type", "button");
    append(&top, &close)?;
    append(&panel, &top)?;

    append(&panel, &el(document, "h2", None, Some(ep.title))?)?;
    append(&panel, &el(document, "p", None, Some(ep.description))?)?;

    let links = el(document, "div", Some("links"), None)?;
    for link in ep.links {
        let a = el(document, "a", None, Some(link.label))?;
        _ = a.set_attribute("href", link.href);
        _ = a.set_attribute("target", "_blank");
        _ = a.set_attribute("rel", "noopener noreferrer");
        append(&links, &a)?;
    }
    append(&panel, &links)?;

    let hook = el(document, "div", Some("xp-hook"), None)?;
    append(&hook, &el(document, "strong", None, Some("XP Hook:"))?)?;
    _ = hook.append_with_str_1(&format!(" {}", ep.xp_hook));
    append(&panel, &hook)?;
    Ok(())
}

#[inline]
pub fn set_compact(document: &web::Document, compact: bool) {
    if let Some(panel) = document.get_element_by_id(PANEL_ID) {
        _ = panel.class_list().toggle_with_force(COMPACT_CLASS, compact);
    }
}

/// Route clicks on the close button (rebuilt with every render) to `on_close`.
pub fn wire_close(
    document: &web::Document,
    mut on_close: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let panel = crate::dom::element(document, PANEL_ID)?;
    crate::dom::add_click_listener(&panel, move |ev| {
        let hit = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|t| t.closest(".close-btn").ok().flatten());
        if hit.is_some() {
            on_close();
        }
    });
    Ok(())
}
