//! Card hover and click effects.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::CardsConfig;
use crate::error::SiteError;
use crate::state::cards::{self, CARD_SELECTOR, PULSE_STYLE, PULSE_Z_INDEX, PointerOffset, RIPPLE_STYLE};
use crate::util::dom::{self, Listener};

pub struct CardsController {
    _listeners: Vec<Listener>,
}

impl CardsController {
    pub fn install(config: &CardsConfig) -> Result<Self, SiteError> {
        let doc = dom::document()?;
        let cards: Vec<HtmlElement> = dom::query_all(&doc, CARD_SELECTOR);
        log::debug!("{} cards", cards.len());

        let mut listeners = Vec::with_capacity(cards.len() * 3);
        for card in cards {
            {
                let card_el = card.clone();
                let doc = doc.clone();
                let ripple_ms = config.ripple_ms;
                listeners.push(Listener::new(card.as_ref(), "mouseenter", move |_| {
                    dom::set_style(&card_el, "transform", cards::hover_transform(true));
                    if let Some(ripple) = overlay(&doc, &card_el, &RIPPLE_STYLE) {
                        remove_after(ripple, ripple_ms);
                    }
                })?);
            }
            {
                let card_el = card.clone();
                listeners.push(Listener::new(card.as_ref(), "mouseleave", move |_| {
                    dom::set_style(&card_el, "transform", cards::hover_transform(false));
                })?);
            }
            {
                let card_el = card.clone();
                let doc = doc.clone();
                let pulse_ms = config.pulse_ms;
                listeners.push(Listener::new(card.as_ref(), "click", move |ev| {
                    let Some(click) = ev.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let bounds = card_el.get_bounding_client_rect();
                    let offset = PointerOffset::within(
                        f64::from(click.client_x()),
                        f64::from(click.client_y()),
                        bounds.left(),
                        bounds.top(),
                    );
                    let Some(pulse) = overlay(&doc, &card_el, &PULSE_STYLE) else {
                        return;
                    };
                    for (name, value) in offset.style() {
                        dom::set_style(&pulse, name, &value);
                    }
                    dom::set_style(&pulse, "z-index", PULSE_Z_INDEX);
                    remove_after(pulse, pulse_ms);
                })?);
            }
        }
        Ok(Self { _listeners: listeners })
    }
}

/// Styled `div` appended to `card`, which becomes its containing block.
fn overlay(doc: &Document, card: &HtmlElement, styles: &[(&str, &str)]) -> Option<HtmlElement> {
    let el = dom::logged("create overlay", doc.create_element("div")).and_then(dom::cast::<HtmlElement>)?;
    dom::set_styles(&el, styles);
    dom::set_style(card, "position", "relative");
    dom::logged("append overlay", card.append_child(&el))?;
    Some(el)
}

fn remove_after(el: HtmlElement, millis: u32) {
    Timeout::new(millis, move || el.remove()).forget();
}
