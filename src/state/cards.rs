//! Card hover lift, hover ripple and click pulse.
//!
//! A hovered card lifts and grows slightly; entering also spawns a ripple
//! at the card's center. A click spawns a pulse at the pointer. Both
//! overlays are absolutely positioned children of the card and are removed
//! once their CSS animation has run.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Cards that get hover and click effects.
pub const CARD_SELECTOR: &str = ".calculator-card, .article-card, .tutorial-card";

pub const LIFTED_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
pub const RESTING_TRANSFORM: &str = "translateY(0) scale(1)";

/// Centered 20px ripple; animated by the `ripple` keyframes.
pub const RIPPLE_STYLE: [(&str, &str); 12] = [
    ("position", "absolute"),
    ("border-radius", "50%"),
    ("background", "rgba(99, 102, 241, 0.3)"),
    ("transform", "scale(0)"),
    ("animation", "ripple 0.6s linear"),
    ("left", "50%"),
    ("top", "50%"),
    ("width", "20px"),
    ("height", "20px"),
    ("margin-left", "-10px"),
    ("margin-top", "-10px"),
    ("pointer-events", "none"),
];

/// 10px pulse; positioned by `PointerOffset::style`.
pub const PULSE_STYLE: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("width", "10px"),
    ("height", "10px"),
    ("border-radius", "50%"),
    ("background", "var(--primary-color)"),
    ("transform", "scale(0)"),
    ("animation", "clickPulse 0.4s ease-out"),
    ("pointer-events", "none"),
];

/// Stacking order of the click pulse above card content.
pub const PULSE_Z_INDEX: &str = "1000";

/// Pointer position relative to a card's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Offset of a click at (`client_x`, `client_y`) inside a card whose
    /// bounding box starts at (`left`, `top`), all in viewport pixels.
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self { x: client_x - left, y: client_y - top }
    }

    /// `left` and `top` declarations placing an overlay at this offset.
    pub fn style(self) -> [(&'static str, String); 2] {
        [("left", format!("{}px", self.x)), ("top", format!("{}px", self.y))]
    }
}

/// Transform for a card given whether the pointer is over it.
pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered { LIFTED_TRANSFORM } else { RESTING_TRANSFORM }
}
