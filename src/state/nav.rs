//! Navigation state: mobile menu, active section, anchor scrolling.
//!
//! DESIGN
//! ======
//! The mobile menu is a two-state machine whose only side effect is the page
//! scroll lock. Section tracking is edge-triggered: a section activates when
//! it newly meets the band trigger, and the most recent activation owns the
//! single active nav link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::theme::ThemePreference;
use crate::state::viewport::{Rect, Trigger};

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    HamburgerClick,
    LinkClick,
    OutsideClick,
    Navigated,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::HamburgerClick) => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Page scroll is suppressed exactly while the menu is open.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }

    /// Value for the body `overflow` style.
    pub fn body_overflow(self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }
}

/// Edge-triggered tracker that keeps at most one active section.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    trigger: Trigger,
    sections: Vec<String>,
    meeting: Vec<bool>,
    active: Option<String>,
}

impl SectionTracker {
    /// Track `sections` (ids in document order).
    pub fn new(trigger: Trigger, sections: Vec<String>) -> Self {
        let meeting = vec![false; sections.len()];
        Self { trigger, sections, meeting, active: None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Feed one measurement pass. `rects` is indexed like `sections`; a `None`
    /// entry means the section could not be measured and is skipped.
    ///
    /// Returns the newly active section id when it changed.
    pub fn observe(&mut self, rects: &[Option<Rect>], viewport_height: f64) -> Option<&str> {
        let mut activated = None;
        for (idx, rect) in rects.iter().enumerate().take(self.sections.len()) {
            let Some(rect) = rect else {
                continue;
            };
            let met = self.trigger.is_met(*rect, viewport_height);
            if met && !self.meeting[idx] {
                activated = Some(idx);
            }
            self.meeting[idx] = met;
        }
        let idx = activated?;
        if self.active.as_deref() == Some(self.sections[idx].as_str()) {
            return None;
        }
        self.active = Some(self.sections[idx].clone());
        self.active.as_deref()
    }
}

/// Section id targeted by an in-page anchor (`#pricing` -> `pricing`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// What clicking a nav link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction<'a> {
    /// Leave the page; the browser follows the link.
    Follow,
    /// Stay on the page (default navigation suppressed) and scroll to the
    /// named section, if any.
    Scroll(Option<&'a str>),
}

/// Every `#` link stays on the page, even a bare `#` or one whose section
/// does not exist.
pub fn link_action(href: &str) -> LinkAction<'_> {
    if href.starts_with('#') { LinkAction::Scroll(anchor_target(href)) } else { LinkAction::Follow }
}

/// Scroll offset that lands an anchor target just below the fixed header.
pub fn anchor_scroll_top(element_document_top: f64, header_height: f64, margin: f64) -> f64 {
    element_document_top - header_height - margin
}

/// Header background tint for the current scroll position and theme.
pub fn header_background(scroll_y: f64, scrolled_after: f64, theme: ThemePreference) -> &'static str {
    let scrolled = scroll_y > scrolled_after;
    match (theme, scrolled) {
        (ThemePreference::Light, false) => "rgba(255, 255, 255, 0.95)",
        (ThemePreference::Light, true) => "rgba(255, 255, 255, 0.98)",
        (ThemePreference::Dark, false) => "rgba(15, 23, 42, 0.95)",
        (ThemePreference::Dark, true) => "rgba(15, 23, 42, 0.98)",
    }
}

/// Meta description for a section, when it has a dedicated one.
pub fn section_description(section: &str) -> Option<&'static str> {
    match section {
        "calculators" => Some(
            "Explore our comprehensive collection of mathematical calculators including basic, scientific, percentage, and geometry calculators.",
        ),
        "articles" => Some(
            "Read educational articles about mathematics, including guides on compound interest, geometry formulas, and algebraic concepts.",
        ),
        "tutorials" => Some(
            "Learn mathematics with our interactive tutorials covering basic arithmetic, fractions, decimals, and algebraic expressions.",
        ),
        "about" => Some(
            "Learn about CalcSphere, your ultimate destination for mathematical calculations, tools, and educational resources.",
        ),
        _ => None,
    }
}

/// First section straddling the line `line_y` px below the viewport top,
/// or `"home"` when none does.
pub fn current_section<'a>(sections: &[(&'a str, Rect)], line_y: f64) -> &'a str {
    sections
        .iter()
        .find(|(_, rect)| rect.top <= line_y && rect.bottom >= line_y)
        .map_or("home", |(id, _)| *id)
}
