use crate::core::nav::fragment_target;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll same-page `#fragment` links to their target.
pub fn wire_smooth_scroll(document: &web::Document) -> anyhow::Result<()> {
    let anchors = document
        .query_selector_all("a[href^=\"#\"]")
        .map_err(dom::js_err)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor.as_ref(), "click", move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = fragment_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
    log::info!("[nav] {} anchor links wired", anchors.length());
    Ok(())
}
