//! Deferred image loading rules.
//!
//! Images marked with `data-src` keep their real source staged until any part
//! of them enters the viewport. Separately, every image after the first few in
//! document order is hinted `loading="lazy"`.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use crate::state::viewport::{Band, OneShotWatch, Trigger};

/// Attribute holding the staged source of a deferred image.
pub const STAGED_SRC_ATTR: &str = "data-src";

/// Whether the image at `index` (document order) gets the lazy decode hint.
pub fn wants_lazy_hint(index: usize, eager_count: usize) -> bool {
    index >= eager_count
}

/// One-shot watch for deferred images.
pub fn image_watch<K: PartialEq>() -> OneShotWatch<K> {
    OneShotWatch::new(Trigger::any_part(Band::full()))
}

/// Real source to swap in, ignoring blank staged values.
pub fn staged_source(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
