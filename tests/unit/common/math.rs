//! Unit tests for series math helpers

use kvant::common::math::{
    ema_series, ema_series_span, latest_value, round_to, sma_series, span_alpha, true_range,
};

#[test]
fn test_sma_series_alignment() {
    let sma = sma_series(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(sma, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
}

#[test]
fn test_sma_series_window_longer_than_input() {
    let sma = sma_series(&[1.0, 2.0, 3.0], 5);
    assert!(sma.iter().all(Option::is_none));
    assert_eq!(sma.len(), 3);
}

#[test]
fn test_sma_series_zero_window() {
    assert_eq!(sma_series(&[1.0, 2.0], 0), vec![None, None]);
}

#[test]
fn test_ema_series_seeded_at_first_value() {
    let ema = ema_series(&[1.0, 2.0, 3.0], 0.5);
    assert_eq!(ema, vec![1.0, 1.5, 2.25]);
}

#[test]
fn test_ema_series_empty() {
    assert!(ema_series(&[], 0.5).is_empty());
}

#[test]
fn test_ema_of_constant_stays_exact() {
    let values = vec![123.45; 300];
    let ema = ema_series_span(&values, 26);
    assert!(ema.iter().all(|v| *v == 123.45));
}

#[test]
fn test_span_alpha() {
    assert_eq!(span_alpha(9), 0.2);
    assert_eq!(span_alpha(1), 1.0);
}

#[test]
fn test_true_range() {
    assert_eq!(true_range(10.0, 8.0, None), 2.0);
    assert_eq!(true_range(10.0, 8.0, Some(12.0)), 4.0);
    assert_eq!(true_range(10.0, 8.0, Some(5.0)), 5.0);
    assert_eq!(true_range(10.0, 8.0, Some(9.0)), 2.0);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(12.3456, 2), 12.35);
    assert_eq!(round_to(-1.234, 1), -1.2);
    assert_eq!(round_to(100.0, 2), 100.0);
}

#[test]
fn test_latest_value() {
    assert_eq!(latest_value(&[Some(1.0), Some(2.0)]), Some(2.0));
    assert_eq!(latest_value(&[Some(1.0), None]), None);
    assert_eq!(latest_value(&[Some(f64::NAN)]), None);
    assert_eq!(latest_value(&[]), None);
}
