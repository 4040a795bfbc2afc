//! Scroll-driven parallax for decorative shapes.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::state::viewport::FrameGate;

/// Per-layer speed factors plus the frame gate that coalesces scroll bursts.
#[derive(Clone, Debug, Default)]
pub struct ParallaxField {
    speeds: Vec<f64>,
    gate: FrameGate,
}

impl ParallaxField {
    /// Assign each of `count` layers a speed in `[min, min + span)` drawn from
    /// `unit`, which must yield values in `[0, 1)`. Speeds are fixed afterwards.
    pub fn new(count: usize, min: f64, span: f64, mut unit: impl FnMut() -> f64) -> Self {
        let speeds = (0..count).map(|_| min + unit().clamp(0.0, 1.0) * span).collect();
        Self { speeds, gate: FrameGate::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// A scroll event arrived. Returns `true` when a frame should be scheduled.
    pub fn scrolled(&mut self) -> bool {
        self.gate.request()
    }

    /// Run the scheduled frame: vertical offsets for every layer.
    pub fn frame(&mut self, scroll_y: f64) -> Vec<f64> {
        self.gate.complete();
        self.speeds.iter().map(|speed| -(scroll_y * speed)).collect()
    }
}

/// CSS transform for a vertical offset.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}
