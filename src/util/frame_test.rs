use super::*;

#[test]
fn millis_converts_positive_values() {
    assert_eq!(millis(16.0), Duration::from_millis(16));
    assert_eq!(millis(1500.0), Duration::from_millis(1500));
    assert_eq!(millis(0.5), Duration::from_micros(500));
}

#[test]
fn millis_clamps_bad_values_to_zero() {
    assert_eq!(millis(0.0), Duration::ZERO);
    assert_eq!(millis(-5.0), Duration::ZERO);
    assert_eq!(millis(f64::NAN), Duration::ZERO);
    assert_eq!(millis(f64::INFINITY), Duration::ZERO);
}

#[test]
fn millis_saturates_oversized_values() {
    assert_eq!(millis(1e300), Duration::MAX);
}
