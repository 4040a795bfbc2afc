//! Theme toggle binding.
//!
//! Applies the resolved theme as `data-theme` on `<html>`, keeps the toggle
//! button's icon and aria-label in sync, and mirrors OS dark-mode changes
//! while no preference is stored. The stored theme is applied even on pages
//! without a toggle button.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MediaQueryList, MediaQueryListEvent, Window};

use crate::config::ThemeConfig;
use crate::error::SiteError;
use crate::state::theme::{ThemePreference, ThemeState};
use crate::util::dom::{self, Listener};
use crate::util::storage::BrowserStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const TOGGLE_ID: &str = "themeToggle";
const RESET_ID: &str = "themeReset";
const BODY_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

/// Document root plus the optional toggle button that reflect the theme.
#[derive(Clone)]
struct ThemeView {
    doc: Document,
    toggle: Option<HtmlElement>,
}

impl ThemeView {
    fn apply(&self, theme: ThemePreference) {
        if let Some(root) = self.doc.document_element() {
            dom::set_attr(&root, "data-theme", theme.as_str());
        }
        let Some(toggle) = &self.toggle else {
            return;
        };
        if let Some(icon) = dom::logged("toggle icon", toggle.query_selector("i")).flatten() {
            icon.set_class_name(theme.toggle_icon());
        }
        dom::set_attr(toggle, "aria-label", theme.toggle_label());
    }

    /// Animate the colour change for `duration_ms`, then drop the transition
    /// so later style changes are not animated.
    fn animate_body(&self, duration_ms: u32) {
        let Some(body) = self.doc.body() else {
            return;
        };
        dom::set_style(&body, "transition", BODY_TRANSITION);
        Timeout::new(duration_ms, move || dom::clear_style(&body, "transition")).forget();
    }
}

pub struct ThemeController {
    _listeners: Vec<Listener>,
}

impl ThemeController {
    pub fn install(config: &ThemeConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let media = dom::logged("matchMedia", window.match_media(DARK_QUERY)).flatten();

        let system_dark = media.as_ref().is_some_and(MediaQueryList::matches);
        let state = ThemeState::load(BrowserStore::open(), config.storage_key.as_str(), system_dark);
        let view = ThemeView { toggle: dom::by_id::<HtmlElement>(&doc, TOGGLE_ID).into_iter().next(), doc };
        view.apply(state.current());
        let state = Rc::new(RefCell::new(state));

        let mut listeners = Vec::with_capacity(3);
        if let Some(toggle) = &view.toggle {
            let state = Rc::clone(&state);
            let view = view.clone();
            let transition_ms = config.transition_ms;
            listeners.push(Listener::new(toggle.as_ref(), "click", move |_| {
                let theme = state.borrow_mut().toggle();
                view.apply(theme);
                view.animate_body(transition_ms);
                log::debug!("theme toggled to {theme}");
            })?);
        } else {
            log::debug!("no #{TOGGLE_ID}; theme applied without a toggle");
        }

        if let Some(media) = media {
            let state = Rc::clone(&state);
            let view = view.clone();
            listeners.push(Listener::new(media.as_ref(), "change", move |ev| {
                let Some(ev) = ev.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let adopted = state.borrow_mut().system_changed(ev.matches());
                if let Some(theme) = adopted {
                    view.apply(theme);
                    log::debug!("theme follows system: {theme}");
                }
            })?);
        } else {
            log::debug!("matchMedia unavailable; system theme changes are not mirrored");
        }

        if let Ok(reset) = dom::by_id::<HtmlElement>(&view.doc, RESET_ID) {
            listeners.push(Listener::new(reset.as_ref(), "click", move |_| {
                let theme = state.borrow_mut().clear_preference(system_prefers_dark(&window));
                view.apply(theme);
                log::debug!("theme preference cleared; following system ({theme})");
            })?);
        }

        Ok(Self { _listeners: listeners })
    }
}

fn system_prefers_dark(window: &Window) -> bool {
    dom::logged("matchMedia", window.match_media(DARK_QUERY)).flatten().is_some_and(|mq| mq.matches())
}
