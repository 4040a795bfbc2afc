//! Scroll reveal targets.
//!
//! Every target starts hidden and offset, then eases into place the first
//! time it enters the viewport (minus a bottom inset). Reveal never reverses.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::state::viewport::{Band, OneShotWatch, Trigger};

/// Selector groups revealed on scroll; stagger restarts within each group.
pub const REVEAL_GROUPS: &[&str] = &[
    ".calculator-card",
    ".article-card",
    ".tutorial-card",
    ".stats-item",
    ".feature-card",
    ".section-header",
    ".section-title",
    ".section-description",
];

pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const REVEALED_CLASS: &str = "revealed";

/// Inline style for a hidden, not yet revealed target.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style applied once a target is revealed.
pub const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Animation delay for the `index`-th element of a selector group.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * step_secs;
    format!("{}s", (secs * 1000.0).round() / 1000.0)
}

/// One-shot watch for reveal targets.
pub fn reveal_watch<K: PartialEq>(bottom_inset_px: f64) -> OneShotWatch<K> {
    OneShotWatch::new(Trigger::any_part(Band::bottom(bottom_inset_px)))
}
