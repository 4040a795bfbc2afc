use super::*;
use crate::state::viewport::Band;

const VH: f64 = 800.0;

fn tracker(ids: &[&str]) -> SectionTracker {
    SectionTracker::new(
        Trigger::fraction(Band::inset(100.0), 0.3),
        ids.iter().map(|s| (*s).to_owned()).collect(),
    )
}

fn visible() -> Option<Rect> {
    Some(Rect::new(150.0, 650.0))
}

fn hidden() -> Option<Rect> {
    Some(Rect::new(2000.0, 2500.0))
}

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().scroll_locked());
}

#[test]
fn hamburger_toggles_menu() {
    let open = MenuState::Closed.next(MenuEvent::HamburgerClick);
    assert_eq!(open, MenuState::Open);
    assert_eq!(open.next(MenuEvent::HamburgerClick), MenuState::Closed);
}

#[test]
fn link_outside_and_navigation_close_menu() {
    for event in [MenuEvent::LinkClick, MenuEvent::OutsideClick, MenuEvent::Navigated] {
        assert_eq!(MenuState::Open.next(event), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(event), MenuState::Closed);
    }
}

#[test]
fn scroll_lock_tracks_open_state() {
    assert_eq!(MenuState::Open.body_overflow(), "hidden");
    assert_eq!(MenuState::Closed.body_overflow(), "");
}

// =============================================================
// SectionTracker
// =============================================================

#[test]
fn first_visible_section_becomes_active() {
    let mut t = tracker(&["home", "calculators"]);
    assert_eq!(t.observe(&[visible(), hidden()], VH), Some("home"));
    assert_eq!(t.active(), Some("home"));
}

#[test]
fn simultaneous_activations_resolve_to_last_in_order() {
    let mut t = tracker(&["home", "calculators", "articles"]);
    assert_eq!(t.observe(&[visible(), visible(), hidden()], VH), Some("calculators"));
}

#[test]
fn staying_visible_does_not_reactivate() {
    let mut t = tracker(&["home", "calculators"]);
    t.observe(&[visible(), hidden()], VH);
    assert_eq!(t.observe(&[visible(), hidden()], VH), None);
    assert_eq!(t.active(), Some("home"));
}

#[test]
fn newly_entering_section_takes_over() {
    let mut t = tracker(&["home", "calculators"]);
    t.observe(&[visible(), hidden()], VH);
    assert_eq!(t.observe(&[visible(), visible()], VH), Some("calculators"));
    assert_eq!(t.active(), Some("calculators"));
}

#[test]
fn leaving_sections_keeps_last_active() {
    let mut t = tracker(&["home"]);
    t.observe(&[visible()], VH);
    assert_eq!(t.observe(&[hidden()], VH), None);
    assert_eq!(t.active(), Some("home"));
}

#[test]
fn reentering_section_reactivates_it() {
    let mut t = tracker(&["home", "calculators"]);
    t.observe(&[visible(), hidden()], VH);
    t.observe(&[hidden(), visible()], VH);
    assert_eq!(t.observe(&[visible(), hidden()], VH), Some("home"));
}

#[test]
fn at_most_one_section_is_active_for_any_combination() {
    let ids = ["a", "b", "c"];
    for mask in 0_u8..8 {
        let mut t = tracker(&ids);
        let rects: Vec<_> = (0..3).map(|i| if mask & (1 << i) != 0 { visible() } else { hidden() }).collect();
        t.observe(&rects, VH);
        let expected = (0..3).rev().find(|i| mask & (1 << i) != 0).map(|i| ids[i]);
        assert_eq!(t.active(), expected, "mask {mask:03b}");
    }
}

#[test]
fn unmeasured_sections_are_skipped() {
    let mut t = tracker(&["home", "calculators"]);
    assert_eq!(t.observe(&[None, visible()], VH), Some("calculators"));
}

// =============================================================
// Anchors and header
// =============================================================

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#calculators"), Some("calculators"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("articles/probability.html"), None);
}

#[test]
fn hash_links_never_follow() {
    assert_eq!(link_action("#about"), LinkAction::Scroll(Some("about")));
    assert_eq!(link_action("#missing-section"), LinkAction::Scroll(Some("missing-section")));
    assert_eq!(link_action("#"), LinkAction::Scroll(None));
    assert_eq!(link_action("calculators/basic-calculator.html"), LinkAction::Follow);
}

#[test]
fn anchor_scroll_subtracts_header_and_margin() {
    assert_eq!(anchor_scroll_top(1200.0, 80.0, 20.0), 1100.0);
}

#[test]
fn header_tint_depends_on_scroll_and_theme() {
    assert_eq!(header_background(0.0, 50.0, ThemePreference::Light), "rgba(255, 255, 255, 0.95)");
    assert_eq!(header_background(51.0, 50.0, ThemePreference::Light), "rgba(255, 255, 255, 0.98)");
    assert_eq!(header_background(50.0, 50.0, ThemePreference::Dark), "rgba(15, 23, 42, 0.95)");
    assert_eq!(header_background(400.0, 50.0, ThemePreference::Dark), "rgba(15, 23, 42, 0.98)");
}

// =============================================================
// Section metadata
// =============================================================

#[test]
fn current_section_defaults_to_home() {
    let sections = [("calculators", Rect::new(300.0, 900.0))];
    assert_eq!(current_section(&sections, 100.0), "home");
}

#[test]
fn current_section_finds_straddling_section() {
    let sections = [("hero", Rect::new(-600.0, 0.0)), ("articles", Rect::new(0.0, 700.0))];
    assert_eq!(current_section(&sections, 100.0), "articles");
}

#[test]
fn only_known_sections_have_descriptions() {
    assert!(section_description("articles").is_some());
    assert!(section_description("home").is_none());
}
