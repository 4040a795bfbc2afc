use super::*;
use crate::util::storage::MemoryStore;

fn store_with(value: Option<&str>) -> MemoryStore {
    let store = MemoryStore::default();
    if let Some(v) = value {
        store.set("theme", v);
    }
    store
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_parses_and_displays() {
    assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
    assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("Dark".parse::<ThemePreference>(), Err(UnknownTheme("Dark".to_owned())));
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

#[test]
fn toggle_icon_and_label_point_at_the_other_theme() {
    assert_eq!(ThemePreference::Dark.toggle_icon(), "fas fa-sun");
    assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(ThemePreference::Light.toggle_icon(), "fas fa-moon");
    assert_eq!(ThemePreference::Light.toggle_label(), "Switch to dark mode");
}

// =============================================================
// Loading
// =============================================================

#[test]
fn stored_preference_overrides_system() {
    let state = ThemeState::load(store_with(Some("light")), "theme", true);
    assert_eq!(state.current(), ThemePreference::Light);
    assert!(!state.follows_system());
}

#[test]
fn absent_preference_follows_system() {
    let state = ThemeState::load(store_with(None), "theme", true);
    assert_eq!(state.current(), ThemePreference::Dark);
    assert!(state.follows_system());
}

#[test]
fn loading_does_not_persist_system_theme() {
    let store = store_with(None);
    let _state = ThemeState::load(store.clone(), "theme", true);
    assert_eq!(store.get("theme"), None);
}

#[test]
fn unknown_stored_value_is_treated_as_absent() {
    let state = ThemeState::load(store_with(Some("sepia")), "theme", false);
    assert_eq!(state.current(), ThemePreference::Light);
    assert!(state.follows_system());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let store = store_with(None);
    let mut state = ThemeState::load(store.clone(), "theme", false);
    assert_eq!(state.toggle(), ThemePreference::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_theme_and_persisted_value() {
    let store = store_with(Some("dark"));
    let mut state = ThemeState::load(store.clone(), "theme", false);
    state.toggle();
    state.toggle();
    assert_eq!(state.current(), ThemePreference::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// System preference mirroring
// =============================================================

#[test]
fn system_change_is_mirrored_without_preference() {
    let store = store_with(None);
    let mut state = ThemeState::load(store.clone(), "theme", false);
    assert_eq!(state.system_changed(true), Some(ThemePreference::Dark));
    assert_eq!(state.current(), ThemePreference::Dark);
    assert_eq!(store.get("theme"), None);
}

#[test]
fn system_change_without_difference_reports_nothing() {
    let mut state = ThemeState::load(store_with(None), "theme", true);
    assert_eq!(state.system_changed(true), None);
}

#[test]
fn manual_toggle_stops_mirroring_permanently() {
    let mut state = ThemeState::load(store_with(None), "theme", false);
    state.toggle();
    assert_eq!(state.system_changed(false), None);
    assert_eq!(state.system_changed(true), None);
    assert_eq!(state.current(), ThemePreference::Dark);
}

#[test]
fn clearing_preference_resumes_mirroring() {
    let store = store_with(Some("light"));
    let mut state = ThemeState::load(store.clone(), "theme", false);
    assert_eq!(state.clear_preference(true), ThemePreference::Dark);
    assert_eq!(store.get("theme"), None);
    assert_eq!(state.system_changed(false), Some(ThemePreference::Light));
}
