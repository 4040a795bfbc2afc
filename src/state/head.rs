//! Declarative head additions: structured data and preload hints.

#[cfg(test)]
#[path = "head_test.rs"]
mod head_test;

use serde_json::{Value, json};

use crate::config::HeadConfig;

/// schema.org description of the site for search engines.
pub fn structured_data(config: &HeadConfig, origin: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": config.site_name,
        "description": config.site_description,
        "url": origin,
        "applicationCategory": "EducationalApplication",
        "operatingSystem": "Any",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        }
    })
}

/// `<link rel="preload">` attributes for one stylesheet URL.
pub fn preload_attributes(href: &str) -> [(&'static str, &str); 3] {
    [("rel", "preload"), ("as", "style"), ("href", href)]
}

/// Label given to interactive elements that have neither a label nor text.
pub const FALLBACK_ARIA_LABEL: &str = "Interactive element";

/// Whether an interactive element needs the fallback accessible label.
pub fn needs_aria_label(aria_label: Option<&str>, text: &str) -> bool {
    aria_label.is_none_or(str::is_empty) && text.trim().is_empty()
}
