//! End-to-end scenarios through indicators and scoring

use chrono::{Duration, NaiveDate};
use kvant::indicators::IndicatorError;
use kvant::models::price::{PriceBar, PriceSeries};
use kvant::models::score::Verdict;
use kvant::signals::AlphaEngine;

fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap() + Duration::days(i as i64)
}

fn series_from_closes(closes: impl Iterator<Item = f64>) -> PriceSeries {
    let bars = closes
        .enumerate()
        .map(|(i, close)| PriceBar::new(day(i), close, close, close, close, 1_000.0))
        .collect();
    PriceSeries::new(bars).unwrap()
}

#[test]
fn test_flat_series_scores_buy() {
    let bars = (0..300)
        .map(|i| PriceBar::new(day(i), 100.0, 101.0, 99.0, 100.0, 1_000.0))
        .collect();
    let series = PriceSeries::new(bars).unwrap();

    let (result, snapshot) = AlphaEngine::evaluate_with_indicators(&series).unwrap();
    assert_eq!(snapshot.rsi_14, Some(50.0));
    assert_eq!(result.score, 60);
    assert_eq!(result.verdict, Verdict::Buy);
}

#[test]
fn test_steady_uptrend_collects_trend_bonuses() {
    let series = series_from_closes((0..250).map(|i| 100.0 + i as f64));
    let (result, snapshot) = AlphaEngine::evaluate_with_indicators(&series).unwrap();

    assert_eq!(snapshot.rsi_14, Some(100.0));
    // +15 +15 trend, +10 MACD, RSI 100 is outside every momentum band
    assert_eq!(result.score, 90);
    assert_eq!(result.verdict, Verdict::StrongBuy);
}

#[test]
fn test_steady_downtrend_earns_oversold_bonus() {
    let series = series_from_closes((0..250).map(|i| 400.0 - i as f64));
    let (result, snapshot) = AlphaEngine::evaluate_with_indicators(&series).unwrap();

    assert_eq!(snapshot.rsi_14, Some(0.0));
    assert!(snapshot.macd.unwrap() < 0.0);
    assert_eq!(result.score, 70);
    assert_eq!(result.verdict, Verdict::Buy);
}

#[test]
fn test_short_history_uses_baseline() {
    let series = series_from_closes((0..10).map(|i| 50.0 + i as f64));
    let result = AlphaEngine::evaluate(&series).unwrap();
    assert_eq!(result.score, 50);
    assert_eq!(result.verdict, Verdict::Hold);
}

#[test]
fn test_volatile_series_is_penalized() {
    // alternating 100 / 110 closes: true range 10 on a ~105 price
    let series = series_from_closes((0..60).map(|i| if i % 2 == 0 { 100.0 } else { 110.0 }));
    let result = AlphaEngine::evaluate(&series).unwrap();
    assert!(result.reasons.iter().any(|r| r.points == -10));
}

#[test]
fn test_empty_series_has_no_score() {
    assert_eq!(AlphaEngine::evaluate(&PriceSeries::empty()), Err(IndicatorError::NoData));
}

#[test]
fn test_evaluation_is_deterministic() {
    let series = series_from_closes((0..252).map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0));
    assert_eq!(AlphaEngine::evaluate(&series), AlphaEngine::evaluate(&series));
}
