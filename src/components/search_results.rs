//! Search dropdown result list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::catalog::CatalogEntry;
use crate::state::search::{SearchHeader, SearchState};

/// Contents of `#searchResults`: nothing while closed, otherwise a header
/// and one row per entry, or the no-results notice.
#[component]
pub fn SearchResultsView(state: RwSignal<SearchState>) -> impl IntoView {
    move || {
        let Some(results) = state.with(|s| s.results().cloned()) else {
            return ().into_any();
        };
        match results.header {
            SearchHeader::NoResults(query) => view! {
                <div class="no-results">
                    <i class="fas fa-search" style="font-size: 2rem; margin-bottom: 1rem; opacity: 0.5;"></i>
                    <div>{format!("No results found for \"{query}\"")}</div>
                    <div style="font-size: 0.8rem; margin-top: 0.5rem;">
                        "Try searching for calculators, articles, or mathematical terms"
                    </div>
                </div>
            }
            .into_any(),
            header => view! {
                <div class="search-results-header">{header.to_string()}</div>
                {results
                    .entries
                    .into_iter()
                    .map(|entry| view! { <SearchResultItem state=state entry=entry /> })
                    .collect_view()}
            }
            .into_any(),
        }
    }
}

#[component]
fn SearchResultItem(state: RwSignal<SearchState>, entry: &'static CatalogEntry) -> impl IntoView {
    let on_click = move |_| {
        if let Some(url) = state.try_update(|s| s.select(entry)) {
            navigate(url);
        }
    };

    view! {
        <div class="search-result-item" on:click=on_click>
            <div class="search-result-title">
                <i class=entry.icon style="margin-right: 0.5rem; color: var(--primary-color);"></i>
                {entry.title}
            </div>
            <div class="search-result-description">{entry.description}</div>
            <span class="search-result-type">{entry.kind.as_str()}</span>
        </div>
    }
}

#[cfg(feature = "csr")]
fn navigate(url: &str) {
    let result = crate::util::dom::window().and_then(|w| w.location().set_href(url).map_err(crate::error::SiteError::from));
    if let Err(e) = result {
        log::warn!("navigation to {url} failed: {e}");
    }
}

#[cfg(not(feature = "csr"))]
fn navigate(url: &str) {
    log::debug!("selected {url}");
}
