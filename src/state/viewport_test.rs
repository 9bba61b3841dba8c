use super::*;

fn metrics(scroll_top: f64, viewport_height: f64, document_height: f64) -> ViewportMetrics {
    ViewportMetrics { scroll_top, viewport_height, document_height }
}

#[test]
fn scrolled_flag_is_strictly_past_threshold() {
    assert!(sample(metrics(100.0, 800.0, 3000.0), 50.0).scrolled_past_threshold);
    assert!(!sample(metrics(50.0, 800.0, 3000.0), 50.0).scrolled_past_threshold);
    assert!(!sample(metrics(0.0, 800.0, 3000.0), 50.0).scrolled_past_threshold);
}

#[test]
fn progress_is_scroll_over_scrollable_height() {
    let s = sample(metrics(550.0, 900.0, 2000.0), 50.0);
    assert!((s.progress_percent - 50.0).abs() < 1e-9);
    let end = sample(metrics(1100.0, 900.0, 2000.0), 50.0);
    assert!((end.progress_percent - 100.0).abs() < 1e-9);
}

#[test]
fn short_document_reports_zero_progress() {
    let s = sample(metrics(0.0, 900.0, 900.0), 50.0);
    assert_eq!(s.progress_percent, 0.0);
    assert!(!s.progress_percent.is_nan());

    let shorter = sample(metrics(10.0, 900.0, 400.0), 50.0);
    assert_eq!(shorter.progress_percent, 0.0);
}

#[test]
fn progress_is_clamped_for_overscroll() {
    assert_eq!(sample(metrics(5000.0, 900.0, 2000.0), 50.0).progress_percent, 100.0);
    assert_eq!(sample(metrics(-40.0, 900.0, 2000.0), 50.0).progress_percent, 0.0);
}

#[test]
fn zeroed_metrics_degrade_to_defaults() {
    assert_eq!(sample(ViewportMetrics::default(), 50.0), ViewportSample::default());
    assert_eq!(ViewportMetrics::read(), ViewportMetrics::default());
}

#[test]
fn sample_renders_header_and_bar_styles() {
    let s = sample(metrics(100.0, 800.0, 1800.0), 50.0);
    assert_eq!(s.header_shadow(), "var(--shadow-lg)");
    assert_eq!(s.progress_width(), "10%");
    assert_eq!(ViewportSample::default().header_shadow(), "none");
    assert_eq!(ViewportSample::default().progress_width(), "0%");
}
