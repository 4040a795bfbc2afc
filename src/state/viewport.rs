//! Viewport intersection geometry and one-shot watches.
//!
//! ARCHITECTURE
//! ============
//! Controllers measure element rectangles (viewport-relative, vertical axis
//! only) once per animation frame and ask these types whether a trigger is
//! met. Keeping the geometry here lets every visibility rule run on the host.
//!
//! ```text
//!   0 ─────────────── viewport top
//!     top_inset
//!   ┌─────────────┐ ── band
//!   │             │
//!   └─────────────┘
//!     bottom_inset
//!   h ─────────────── viewport bottom
//! ```

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Viewport region shrunk by fixed insets from its top and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Band {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Band {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn inset(px: f64) -> Self {
        Self { top_inset: px, bottom_inset: px }
    }

    pub fn bottom(px: f64) -> Self {
        Self { top_inset: 0.0, bottom_inset: px }
    }

    /// Fraction of `rect` inside the band, in `[0, 1]`.
    ///
    /// Zero-height elements count as fully visible when their edge lies inside
    /// the band.
    pub fn visible_ratio(self, rect: Rect, viewport_height: f64) -> f64 {
        let band_top = self.top_inset;
        let band_bottom = viewport_height - self.bottom_inset;
        if band_bottom <= band_top {
            return 0.0;
        }
        let height = rect.height();
        if height == 0.0 {
            return if rect.top >= band_top && rect.top <= band_bottom { 1.0 } else { 0.0 };
        }
        let overlap = rect.bottom.min(band_bottom) - rect.top.max(band_top);
        (overlap / height).clamp(0.0, 1.0)
    }
}

/// Measured extent of an element, or `None` when it has no layout box
/// (`display: none`, detached). Such elements are never in view, even though
/// the browser reports an all-zero rect for them.
pub fn laid_out(box_count: u32, rect: Rect) -> Option<Rect> {
    (box_count > 0).then_some(rect)
}

/// Band plus the visible fraction required to fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub band: Band,
    /// `0.0` fires on any overlap; otherwise the ratio must reach this value.
    pub threshold: f64,
}

impl Trigger {
    pub fn any_part(band: Band) -> Self {
        Self { band, threshold: 0.0 }
    }

    pub fn fraction(band: Band, threshold: f64) -> Self {
        Self { band, threshold }
    }

    pub fn is_met(self, rect: Rect, viewport_height: f64) -> bool {
        let ratio = self.band.visible_ratio(rect, viewport_height);
        if self.threshold <= 0.0 { ratio > 0.0 } else { ratio >= self.threshold }
    }
}

/// Keeps at most one animation-frame request in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame now.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run (or failed to schedule).
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Targets that fire once when their trigger is met, then stop being watched.
#[derive(Clone, Debug)]
pub struct OneShotWatch<K> {
    trigger: Trigger,
    pending: Vec<K>,
}

impl<K: PartialEq> OneShotWatch<K> {
    pub fn new(trigger: Trigger) -> Self {
        Self { trigger, pending: Vec::new() }
    }

    pub fn watch(&mut self, key: K) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    /// Measure every pending target and return those that fired, in watch
    /// order. Fired targets are released. `measure` returning `None` (target
    /// detached from the document) keeps the target pending.
    pub fn poll<F>(&mut self, viewport_height: f64, mut measure: F) -> Vec<K>
    where
        F: FnMut(&K) -> Option<Rect>,
    {
        let trigger = self.trigger;
        let mut fired = Vec::new();
        let mut kept = Vec::with_capacity(self.pending.len());
        for key in self.pending.drain(..) {
            match measure(&key) {
                Some(rect) if trigger.is_met(rect, viewport_height) => fired.push(key),
                _ => kept.push(key),
            }
        }
        self.pending = kept;
        fired
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
