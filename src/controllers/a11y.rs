//! Accessibility touch-ups: fallback labels and the keyboard focus class.

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::error::SiteError;
use crate::state::head::{self, FALLBACK_ARIA_LABEL};
use crate::util::dom::{self, Listener};

const KEYBOARD_CLASS: &str = "keyboard-navigation";

pub struct A11yController {
    _listeners: [Listener; 2],
}

impl A11yController {
    pub fn install() -> Result<Self, SiteError> {
        let doc = dom::document()?;
        let body = dom::body(&doc)?;

        let mut labelled = 0;
        for el in dom::query_all::<Element>(&doc, "button, a, input") {
            let text = el.text_content().unwrap_or_default();
            if head::needs_aria_label(el.get_attribute("aria-label").as_deref(), &text) {
                dom::set_attr(&el, "aria-label", FALLBACK_ARIA_LABEL);
                labelled += 1;
            }
        }
        if labelled > 0 {
            log::debug!("added fallback aria-label to {labelled} elements");
        }

        let body_for_keys = body.clone();
        let keydown = Listener::new(doc.as_ref(), "keydown", move |ev| {
            if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Tab") {
                dom::set_class(&body_for_keys, KEYBOARD_CLASS, true);
            }
        })?;
        let mousedown = Listener::new(doc.as_ref(), "mousedown", move |_| {
            dom::set_class(&body, KEYBOARD_CLASS, false);
        })?;
        Ok(Self { _listeners: [keydown, mousedown] })
    }
}
