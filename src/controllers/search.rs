//! Search dropdown binding.
//!
//! The dropdown shell (`#searchDropdown`, `#searchInput`) is static markup;
//! the result list inside `#searchResults` is a mounted Leptos view driven by
//! one `SearchState` signal. An effect keeps the shell's `active` class and
//! the input value in step with that state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::components::search_results::SearchResultsView;
use crate::config::SearchConfig;
use crate::error::SiteError;
use crate::state::search::{Catalog, SearchState};
use crate::util::dom::{self, Listener};

const CONTAINER: &str = ".search-container";

pub struct SearchController {
    _listeners: Vec<Listener>,
}

impl SearchController {
    pub fn install(config: &SearchConfig) -> Result<Self, SiteError> {
        let doc = dom::document()?;
        let toggle: HtmlElement = dom::by_id(&doc, "searchToggle")?;
        let dropdown: HtmlElement = dom::by_id(&doc, "searchDropdown")?;
        let input: HtmlInputElement = dom::by_id(&doc, "searchInput")?;
        let results: HtmlElement = dom::by_id(&doc, "searchResults")?;

        let state = RwSignal::new(SearchState::new(Catalog::builtin(config.popular_count)));

        {
            let input = input.clone();
            leptos::mount::mount_to(results, move || {
                Effect::new(move |_| {
                    let (open, query) = state.with(|s| (s.is_open(), s.query().to_owned()));
                    dom::set_class(&dropdown, "active", open);
                    if input.value() != query {
                        input.set_value(&query);
                    }
                });
                view! { <SearchResultsView state=state /> }
            })
            .forget();
        }

        let mut listeners = Vec::with_capacity(4);
        {
            let input = input.clone();
            listeners.push(Listener::new(toggle.as_ref(), "click", move |_| {
                state.update(SearchState::toggle);
                if state.with_untracked(SearchState::is_open) {
                    dom::logged("search input focus", input.focus());
                }
            })?);
        }
        {
            let input_el = input.clone();
            listeners.push(Listener::new(input.as_ref(), "input", move |_| {
                let query = input_el.value();
                state.update(|s| s.input(&query));
            })?);
        }
        listeners.push(Listener::new(doc.as_ref(), "click", move |ev| {
            let inside = dom::event_element(&ev)
                .and_then(|el| dom::logged("closest", el.closest(CONTAINER)).flatten())
                .is_some();
            if !inside {
                close(state);
            }
        })?);
        listeners.push(Listener::new(doc.as_ref(), "keydown", move |ev| {
            if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                close(state);
            }
        })?);

        Ok(Self { _listeners: listeners })
    }
}

fn close(state: RwSignal<SearchState>) {
    if state.with_untracked(SearchState::is_open) {
        state.update(SearchState::close);
    }
}
