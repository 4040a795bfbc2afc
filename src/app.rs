//! Boot sequence.
//!
//! Controllers install independently: one that fails (usually because its
//! markup is absent on this page) is logged and skipped. Diagnostics goes
//! first so later failures are captured.

use std::rc::Rc;

use web_sys::HtmlElement;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::controllers::a11y::A11yController;
use crate::controllers::cards::CardsController;
use crate::controllers::counter::CounterController;
use crate::controllers::diagnostics::DiagnosticsController;
use crate::controllers::head::HeadController;
use crate::controllers::media::MediaController;
use crate::controllers::nav::NavController;
use crate::controllers::parallax::ParallaxController;
use crate::controllers::reveal::RevealController;
use crate::controllers::search::SearchController;
use crate::controllers::theme::ThemeController;
use crate::error::SiteError;
use crate::state::diagnostics::ConsoleSink;
use crate::util::dom;

/// Every installed controller. Dropping it detaches all listeners.
pub struct Site {
    pub diagnostics: Option<DiagnosticsController>,
    pub theme: Option<ThemeController>,
    pub nav: Option<NavController>,
    pub counters: Option<CounterController>,
    pub cards: Option<CardsController>,
    pub search: Option<SearchController>,
    pub media: Option<MediaController>,
    pub reveal: Option<RevealController>,
    pub parallax: Option<ParallaxController>,
    pub head: Option<HeadController>,
    pub a11y: Option<A11yController>,
}

impl Site {
    pub fn boot(config: &SiteConfig) -> Self {
        let site = Self {
            diagnostics: installed(
                "diagnostics",
                DiagnosticsController::install(&config.diagnostics, Rc::new(ConsoleSink)),
            ),
            theme: installed("theme", ThemeController::install(&config.theme)),
            nav: installed("navigation", NavController::install(&config.nav)),
            counters: installed("counters", CounterController::install(&config.counter)),
            cards: installed("cards", CardsController::install(&config.cards)),
            search: installed("search", SearchController::install(&config.search)),
            media: installed("media", MediaController::install(&config.media)),
            reveal: installed("reveal", RevealController::install(&config.reveal)),
            parallax: installed("parallax", ParallaxController::install(&config.parallax)),
            head: installed("head", HeadController::install(&config.head)),
            a11y: installed("accessibility", A11yController::install()),
        };

        if let Err(e) = dom::document().and_then(|doc| dom::body(&doc)).and_then(mark_loaded) {
            log::warn!("could not mark page loaded: {e}");
        }
        site
    }
}

fn installed<T>(name: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(controller) => {
            log::debug!("{name} installed");
            Some(controller)
        }
        Err(e) => {
            log::warn!("{name} skipped: {e}");
            None
        }
    }
}

fn mark_loaded(body: HtmlElement) -> Result<(), SiteError> {
    body.class_list().add_1("loaded")?;
    Ok(())
}

/// Inline `#site-config` overrides, or defaults when absent or invalid.
pub fn load_config() -> SiteConfig {
    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{e}; using default config");
            return SiteConfig::default();
        }
    };
    let Some(raw) = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("{e}; using default config");
        SiteConfig::default()
    })
}
