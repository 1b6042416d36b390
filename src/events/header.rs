use crate::core::header::header_style;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(header: &web::HtmlElement) {
    let style = header_style(dom::scroll_y());
    dom::set_styles(header, &style.declarations());
}

/// Swap the `.header` styling around the scroll threshold; also applied once now.
pub fn wire_header_scroll(document: &web::Document) {
    let Some(header) = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[header] no .header; skipping");
        return;
    };
    let header_scroll = header.clone();
    dom::listen_window("scroll", move |_: web::Event| apply(&header_scroll));
    apply(&header);
}
