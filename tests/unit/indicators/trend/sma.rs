//! Unit tests for SMA indicator

use chrono::{Duration, NaiveDate};
use kvant::indicators::trend::{calculate_sma, calculate_smas};
use kvant::models::price::PriceBar;

fn create_test_bars(count: usize) -> Vec<PriceBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    (0..count)
        .map(|i| {
            let price = (i + 1) as f64;
            PriceBar::new(start + Duration::days(i as i64), price, price + 0.5, price - 0.5, price, 1000.0)
        })
        .collect()
}

#[test]
fn test_sma_insufficient_data() {
    assert!(calculate_sma(&create_test_bars(49), 50).is_none());
}

#[test]
fn test_sma_exact_window() {
    let sma = calculate_sma(&create_test_bars(50), 50).unwrap();
    assert_eq!(sma.period, 50);
    assert_eq!(sma.value, 25.5);
}

#[test]
fn test_sma_uses_trailing_window() {
    // closes 1..=60, last 50 are 11..=60
    let sma = calculate_sma(&create_test_bars(60), 50).unwrap();
    assert_eq!(sma.value, 35.5);
}

#[test]
fn test_sma_zero_period() {
    assert!(calculate_sma(&create_test_bars(10), 0).is_none());
}

#[test]
fn test_calculate_multiple_smas() {
    let smas = calculate_smas(&create_test_bars(120), &[20, 50, 200]);
    assert_eq!(smas.len(), 2);
    assert_eq!(smas[0].period, 20);
    assert_eq!(smas[1].period, 50);
}
