use super::*;

#[test]
fn defaults_match_page_behavior() {
    let config = FxConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.scroll_threshold_px, 50.0);
    assert_eq!(config.counter.duration_ms, 2000.0);
    assert_eq!(config.counter.frame_interval_ms, 16.0);
    assert_eq!(config.transient_delay_ms, 1500);
    assert_eq!(config.fade_in.threshold, 0.1);
    assert_eq!(config.fade_in.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.stats.threshold, 0.5);
    assert_eq!(config.completion_message, "Action completed!");
}

#[test]
fn counter_timing_spreads_over_125_steps() {
    assert_eq!(CounterTiming::default().steps(), 125.0);
}

#[test]
fn degenerate_counter_timing_completes_in_one_step() {
    let zero_duration = CounterTiming { duration_ms: 0.0, frame_interval_ms: 16.0 };
    assert_eq!(zero_duration.steps(), 1.0);
    let zero_frame = CounterTiming { duration_ms: 2000.0, frame_interval_ms: 0.0 };
    assert_eq!(zero_frame.steps(), 1.0);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = FxConfig::from_json(r#"{"transient_delay_ms": 900, "stats": {"threshold": 0.75}}"#)
        .expect("partial config should parse");
    assert_eq!(config.transient_delay_ms, 900);
    assert_eq!(config.stats.threshold, 0.75);
    assert_eq!(config.stats.root_margin, "0px");
    assert_eq!(config.fade_in, ObserverConfig::fade_in());
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn partial_fade_in_override_keeps_its_bottom_margin() {
    let config = FxConfig::from_json(r#"{"fade_in": {"threshold": 0.2}}"#).expect("partial config should parse");
    assert_eq!(config.fade_in.threshold, 0.2);
    assert_eq!(config.fade_in.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.stats, ObserverConfig::stats());
}

#[test]
fn partial_stats_override_keeps_its_threshold() {
    let config = FxConfig::from_json(r#"{"stats": {"root_margin": "10px"}}"#).expect("partial config should parse");
    assert_eq!(config.stats.threshold, 0.5);
    assert_eq!(config.stats.root_margin, "10px");
    assert_eq!(config.fade_in, ObserverConfig::fade_in());
}

#[test]
fn empty_observer_object_keeps_family_defaults() {
    let config = FxConfig::from_json(r#"{"fade_in": {}, "stats": {}}"#).expect("config should parse");
    assert_eq!(config.fade_in, ObserverConfig::fade_in());
    assert_eq!(config.stats, ObserverConfig::stats());
}

#[test]
fn from_json_clamps_out_of_range_values() {
    let config = FxConfig::from_json(
        r#"{"fade_in": {"threshold": 3.0}, "scroll_threshold_px": -10, "storage_key": "  "}"#,
    )
    .expect("config should parse");
    assert_eq!(config.fade_in.threshold, 1.0);
    assert_eq!(config.scroll_threshold_px, 0.0);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(FxConfig::from_json("not json"), Err(FxError::Config(_))));
}

#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(FxConfig::load(), FxConfig::default());
}
