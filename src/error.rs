//! Error type shared by configuration loading and browser controllers.
//!
//! ERROR HANDLING
//! ==============
//! Controllers return `SiteError` from `install`; the boot sequence logs the
//! failure and keeps going, so one missing element never takes the rest of
//! the page down.

/// Failure raised while wiring a site component.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required element (by id or selector) is not present in the markup.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API the component needs is not available.
    #[error("browser api unavailable: {0}")]
    Unavailable(&'static str),
    /// A JavaScript call threw or rejected.
    #[error("javascript error: {0}")]
    Js(String),
    /// The inline site configuration could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
