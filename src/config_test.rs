use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_shipped_site() {
    let config = SiteConfig::default();
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.transition_ms, 300);
    assert_eq!(config.nav.scroll_margin_px, 20.0);
    assert_eq!(config.nav.section_band_inset_px, 100.0);
    assert_eq!(config.nav.section_threshold, 0.3);
    assert_eq!(config.reveal.bottom_inset_px, 50.0);
    assert_eq!(config.counter.duration_ms, 2000);
    assert_eq!(config.counter.steps, 100);
    assert_eq!(config.cards.ripple_ms, 600);
    assert_eq!(config.cards.pulse_ms, 400);
    assert_eq!(config.search.popular_count, 6);
    assert_eq!(config.media.eager_image_count, 3);
    assert_eq!(config.diagnostics.scroll_milestones, vec![25, 50, 75, 100]);
    assert_eq!(config.head.preload_styles.len(), 2);
}

#[test]
fn default_log_level_is_info() {
    assert_eq!(SiteConfig::default().log_level.level(), Some(log::Level::Info));
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = SiteConfig::from_json(r#"{ "theme": { "transition_ms": 150 }, "search": { "popular_count": 4 } }"#)
        .expect("partial config should parse");
    assert_eq!(config.theme.transition_ms, 150);
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.search.popular_count, 4);
    assert_eq!(config.counter, CounterConfig::default());
}

#[test]
fn card_effect_timings_override_independently() {
    let config = SiteConfig::from_json(r#"{ "cards": { "pulse_ms": 250 } }"#).expect("cards config should parse");
    assert_eq!(config.cards.pulse_ms, 250);
    assert_eq!(config.cards.ripple_ms, 600);
}

#[test]
fn empty_object_is_default_config() {
    let config = SiteConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = SiteConfig::from_json(r#"{ "log_level": "DEBUG" }"#).expect("should parse");
    assert_eq!(config.log_level.level(), Some(log::Level::Debug));
}

#[test]
fn unknown_log_level_resolves_to_none() {
    let level = LogLevel("chatty".to_owned());
    assert_eq!(level.level(), None);
}
