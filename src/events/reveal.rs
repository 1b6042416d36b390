use crate::core::reveal::RevealTracker;
use crate::core::{REVEAL_ACTIVE_CLASS, REVEAL_THRESHOLD};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Observe every `.reveal` element and mark it active the first time it shows.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document.query_selector_all(".reveal").map_err(dom::js_err)?;
    if nodes.length() == 0 {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::<web::Element>::new()));

    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let fire = tracker_cb.borrow_mut().on_entry(
                    &target,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if fire {
                    _ = target.class_list().add_1(REVEAL_ACTIVE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin("0px");
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(dom::js_err)?;
    callback.forget();

    let mut t = tracker.borrow_mut();
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        observer.observe(&el);
        t.observe(el);
    }
    log::info!("[reveal] observing {} elements", nodes.length());
    Ok(())
}
