//! Diagnostics events, sinks, and scroll-depth milestones.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site reports errors and coarse engagement signals to a collector. The
//! shipped collector is the browser console (`ConsoleSink`); a telemetry
//! backend would implement `DiagnosticsSink` instead.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use std::fmt;

/// Source of a captured runtime failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Uncaught,
    UnhandledRejection,
}

/// One reportable signal.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticEvent {
    PageView { path: String },
    Interaction { label: String },
    ScrollDepth { percent: u8 },
    PageLoad { millis: f64 },
    Error { kind: ErrorKind, message: String },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageView { path } => write!(f, "Page view tracked: {path}"),
            Self::Interaction { label } => write!(f, "Interaction tracked: {label}"),
            Self::ScrollDepth { percent } => write!(f, "Scroll depth tracked: {percent}%"),
            Self::PageLoad { millis } => write!(f, "Page load time: {millis} ms"),
            Self::Error { kind: ErrorKind::Uncaught, message } => write!(f, "JavaScript error: {message}"),
            Self::Error { kind: ErrorKind::UnhandledRejection, message } => {
                write!(f, "Unhandled promise rejection: {message}")
            }
        }
    }
}

/// Destination for diagnostic events.
pub trait DiagnosticsSink {
    fn emit(&self, event: DiagnosticEvent);
}

/// Writes events through the `log` facade: errors at `error`, the rest at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn emit(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::Error { .. } => log::error!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}

/// Whether an element with these classes counts as an interaction target.
pub fn is_interactive<'a>(classes: impl IntoIterator<Item = &'a str>, interactive: &[String]) -> bool {
    classes.into_iter().any(|class| interactive.iter().any(|i| i == class))
}

/// Scroll position as a rounded percentage of the scrollable distance, or
/// `None` when the document does not scroll.
#[allow(clippy::cast_possible_truncation)]
pub fn scroll_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> Option<i64> {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return None;
    }
    Some((scroll_y / scrollable * 100.0).round() as i64)
}

/// Milestones that fire once each as the deepest scroll position grows.
#[derive(Clone, Debug)]
pub struct ScrollDepthTracker {
    milestones: Vec<u8>,
    fired: Vec<bool>,
    deepest: i64,
}

impl ScrollDepthTracker {
    pub fn new(mut milestones: Vec<u8>) -> Self {
        milestones.sort_unstable();
        milestones.dedup();
        let fired = vec![false; milestones.len()];
        Self { milestones, fired, deepest: 0 }
    }

    /// Record a scroll percentage and return milestones crossed for the first time.
    pub fn record(&mut self, percent: i64) -> Vec<u8> {
        if percent <= self.deepest {
            return Vec::new();
        }
        self.deepest = percent;
        let mut crossed = Vec::new();
        for (milestone, fired) in self.milestones.iter().zip(self.fired.iter_mut()) {
            if !*fired && percent >= i64::from(*milestone) {
                *fired = true;
                crossed.push(*milestone);
            }
        }
        crossed
    }

    pub fn is_complete(&self) -> bool {
        self.fired.iter().all(|f| *f)
    }
}
