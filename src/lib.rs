#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod render;
mod signal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("signal-site-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no window/document");
        return Ok(());
    };
    // Module scripts run after parsing, but a classic load may still be early.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let mut ran = false;
        dom::listen(document.as_ref(), "DOMContentLoaded", move |_: web::Event| {
            if !ran {
                ran = true;
                init(&doc);
            }
        });
    } else {
        init(&document);
    }
    Ok(())
}

// Every feature is optional; one failing does not stop the others.
fn init(document: &web::Document) {
    if let Err(e) = events::wire_smooth_scroll(document) {
        log::error!("smooth scroll init error: {:?}", e);
    }
    events::wire_contact_form(document);
    if let Err(e) = hero::start(document) {
        log::error!("hero init error: {:?}", e);
    }
    events::wire_header_scroll(document);
    if let Err(e) = events::wire_reveal(document) {
        log::error!("reveal init error: {:?}", e);
    }

    let doc = document.clone();
    dom::set_timeout(crate::core::SCENE_START_DELAY_MS, move || {
        if let Err(e) = signal::start(&doc) {
            log::error!("signal scene init error: {:?}", e);
        }
    });
}
