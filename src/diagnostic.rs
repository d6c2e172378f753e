use web_sys as web;

const SCREEN_STYLE: &str = "position:fixed;inset:0;padding:18px;background:#020308;color:white;\
z-index:1000;font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial";
const PRE_STYLE: &str = "margin-top:14px;padding:14px;border-radius:12px;\
background:rgba(255,255,255,0.06);border:1px solid rgba(255,255,255,0.12);\
overflow:auto;white-space:pre-wrap;word-break:break-word";

/// Replace the page with a static crash screen carrying `details`.
///
/// Nothing is recovered; the render loop is expected to be dead by now.
pub fn show(details: &str) {
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    if document.get_element_by_id("diagnostic").is_some() {
        return;
    }
    if let Err(e) = build(&document, &body, details) {
        log::error!("[diagnostic] could not render crash screen: {:?}", e);
    }
}

fn build(
    document: &web::Document,
    body: &web::HtmlElement,
    details: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    let screen = document.create_element("div")?;
    screen.set_id("diagnostic");
    screen.set_attribute("style", SCREEN_STYLE)?;

    let inner = document.create_element("div")?;
    inner.set_attribute("style", "max-width:920px;margin:0 auto")?;

    let kicker = document.create_element("div")?;
    kicker.set_attribute("style", "opacity:0.7;letter-spacing:0.22em;font-size:12px")?;
    kicker.set_text_content(Some("N9NEVERSE — DIAGNOSTIC"));

    let heading = document.create_element("h1")?;
    heading.set_attribute("style", "margin:10px 0 8px;font-size:18px")?;
    heading.set_text_content(Some("Something crashed while loading."));

    let note = document.create_element("p")?;
    note.set_attribute("style", "margin:0;opacity:0.85;line-height:1.45")?;
    note.set_text_content(Some(
        "If you screenshot this and send it to me, I’ll fix it fast.",
    ));

    let pre = document.create_element("pre")?;
    pre.set_attribute("style", PRE_STYLE)?;
    pre.set_text_content(Some(details));

    inner.append_child(&kicker)?;
    inner.append_child(&heading)?;
    inner.append_child(&note)?;
    inner.append_child(&pre)?;
    screen.append_child(&inner)?;
    body.set_inner_html("");
    body.append_child(&screen)?;
    Ok(())
}

/// Forward panics to the console and to the crash screen.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        show(&info.to_string());
    }));
}
