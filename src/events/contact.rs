use crate::core::form::{
    timer_deadlines, ContactFields, SubmitEvent, SubmitMachine, SUCCESS_CLASS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct ContactForm {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    machine: SubmitMachine,
}

impl ContactForm {
    fn apply(&self, event: SubmitEvent) {
        if event == SubmitEvent::ShowSent {
            self.form.reset();
        }
        let Some(btn) = &self.button else {
            return;
        };
        let view = self.machine.view();
        btn.set_text_content(Some(&view.label));
        btn.set_disabled(view.disabled);
        let cl = btn.class_list();
        if view.success {
            _ = cl.add_1(SUCCESS_CLASS);
        } else {
            _ = cl.remove_1(SUCCESS_CLASS);
        }
    }

    fn on_timer(&mut self, deadline_ms: f64) {
        for ev in self.machine.on_timer(deadline_ms, dom::now_ms()) {
            self.apply(ev);
        }
    }
}

// Works for both <input> and <textarea>.
fn field_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

/// Validate `#contactForm` on submit and play the simulated send sequence.
pub fn wire_contact_form(document: &web::Document) {
    let Some(el) = document.get_element_by_id("contactForm") else {
        log::debug!("[contact] no #contactForm; skipping");
        return;
    };
    let Ok(form) = el.dyn_into::<web::HtmlFormElement>() else {
        log::debug!("[contact] #contactForm is not a form");
        return;
    };
    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
    let original_label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();

    let state = Rc::new(RefCell::new(ContactForm {
        form: form.clone(),
        button,
        machine: SubmitMachine::new(original_label),
    }));
    let doc = document.clone();
    dom::listen(form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        let fields = ContactFields {
            name: field_value(&doc, "name"),
            email: field_value(&doc, "email"),
            message: field_value(&doc, "message"),
        };
        let started = dom::now_ms();
        let submitted = state.borrow_mut().machine.submit(&fields, started);
        let first = match submitted {
            Ok(first) => first,
            Err(e) => {
                log::debug!("[contact] rejected: {}", e);
                alert(&e.to_string());
                return;
            }
        };
        state.borrow().apply(first);
        for deadline in timer_deadlines(started) {
            let timer = state.clone();
            dom::set_timeout((deadline - started) as i32, move || {
                timer.borrow_mut().on_timer(deadline)
            });
        }
    });
    log::info!("[contact] form wired");
}
