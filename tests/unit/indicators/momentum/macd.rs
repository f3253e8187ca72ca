//! Unit tests for MACD indicator

use chrono::{Duration, NaiveDate};
use kvant::indicators::momentum::{calculate_macd, calculate_macd_default, macd_series};
use kvant::models::price::PriceBar;

fn create_test_bars(count: usize, base_price: f64, step: f64) -> Vec<PriceBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    (0..count)
        .map(|i| {
            let price = base_price + i as f64 * step;
            PriceBar::new(start + Duration::days(i as i64), price, price + 0.5, price - 0.5, price, 1000.0)
        })
        .collect()
}

#[test]
fn test_macd_series_hand_computed() {
    // fast span 1 tracks the close; slow and signal span 3 use alpha 0.5
    let (macd, signal) = macd_series(&[1.0, 2.0], 1, 3, 3);
    assert_eq!(macd, vec![0.0, 0.5]);
    assert_eq!(signal, vec![0.0, 0.25]);
}

#[test]
fn test_macd_insufficient_data() {
    let bars = create_test_bars(25, 100.0, 1.0);
    assert!(calculate_macd_default(&bars).is_none());
}

#[test]
fn test_macd_available_at_slow_span() {
    let bars = create_test_bars(26, 100.0, 1.0);
    let macd = calculate_macd_default(&bars).unwrap();
    assert_eq!(macd.period, (12, 26, 9));
    assert!(macd.macd.is_finite());
}

#[test]
fn test_macd_flat_series_is_zero() {
    let bars = create_test_bars(100, 100.0, 0.0);
    let macd = calculate_macd_default(&bars).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_uptrend_positive() {
    let bars = create_test_bars(60, 100.0, 1.0);
    let macd = calculate_macd(&bars, 12, 26, 9).unwrap();
    assert!(macd.macd > 0.0);
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-12);
}

#[test]
fn test_macd_downtrend_negative() {
    let bars = create_test_bars(60, 200.0, -1.0);
    let macd = calculate_macd_default(&bars).unwrap();
    assert!(macd.macd < 0.0);
}
