//! Site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every timing, threshold and URL the controllers use lives here. Defaults
//! match the shipped site; a page may override any subset through an inline
//! `<script type="application/json" id="site-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Element id of the optional inline JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level configuration for all site controllers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub cards: CardsConfig,
    pub search: SearchConfig,
    pub media: MediaConfig,
    pub parallax: ParallaxConfig,
    pub diagnostics: DiagnosticsConfig,
    pub head: HeadConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Log level name as written in configuration (`"info"`, `"debug"`, ...).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_owned())
    }
}

impl LogLevel {
    /// Resolve to a `log::Level`, or `None` when the name is not recognized.
    pub fn level(&self) -> Option<log::Level> {
        let name = self.0.trim();
        log::Level::iter().find(|level| level.as_str().eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub transition_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: "theme".to_owned(), transition_ms: 300 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Extra gap left above an anchor target after subtracting the header.
    pub scroll_margin_px: f64,
    /// Inset applied to both top and bottom of the viewport for section tracking.
    pub section_band_inset_px: f64,
    /// Fraction of a section that must sit inside the band to become active.
    pub section_threshold: f64,
    /// Scroll offset after which the header switches to its scrolled tint.
    pub header_scrolled_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_margin_px: 20.0,
            section_band_inset_px: 100.0,
            section_threshold: 0.3,
            header_scrolled_after_px: 50.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub bottom_inset_px: f64,
    pub stagger_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { bottom_inset_px: 50.0, stagger_secs: 0.1 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub steps: u32,
    pub visible_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: 2000, steps: 100, visible_threshold: 0.5 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardsConfig {
    /// Lifetime of the hover ripple, matching its CSS animation.
    pub ripple_ms: u32,
    /// Lifetime of the click pulse, matching its CSS animation.
    pub pulse_ms: u32,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self { ripple_ms: 600, pulse_ms: 400 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub popular_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { popular_count: 6 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Images at or beyond this document index get `loading="lazy"`.
    pub eager_image_count: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self { eager_image_count: 3 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
    pub speed_min: f64,
    pub speed_span: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { speed_min: 0.2, speed_span: 0.5 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub scroll_milestones: Vec<u8>,
    pub interactive_classes: Vec<String>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            scroll_milestones: vec![25, 50, 75, 100],
            interactive_classes: vec!["btn".to_owned(), "card-link".to_owned(), "nav-link".to_owned()],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadConfig {
    pub site_name: String,
    pub site_description: String,
    pub preload_styles: Vec<String>,
    pub service_worker_url: String,
    pub analytics_measurement_id: String,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            site_name: "CalcSphere".to_owned(),
            site_description: "Advanced mathematical tools and calculators".to_owned(),
            preload_styles: vec![
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap".to_owned(),
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css".to_owned(),
            ],
            service_worker_url: "/sw.js".to_owned(),
            analytics_measurement_id: "GA_MEASUREMENT_ID".to_owned(),
        }
    }
}
