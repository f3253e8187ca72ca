//! Unit tests for the outbound report

use chrono::NaiveDate;
use kvant::models::indicators::IndicatorSnapshot;
use kvant::models::report::{AlphaReport, CompanyProfile};
use kvant::models::score::{ScoreResult, Verdict};

fn snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot::new(NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(), 123.456)
        .with_rsi(Some(55.5555))
        .with_atr(Some(3.0))
}

#[test]
fn test_report_uses_placeholders() {
    let report = AlphaReport::build("aapl", &snapshot(), ScoreResult::new(60, Vec::new()), CompanyProfile::default());
    assert_eq!(report.symbol, "AAPL");
    assert_eq!(report.company_name, "AAPL");
    assert_eq!(report.sector, "Unknown");
    assert!(report.market_cap.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["market_cap"], "N/A");
    assert_eq!(json["beta"], "N/A");
    assert_eq!(json["verdict"], "BUY");
    assert_eq!(json["as_of"], "2024-06-28");
}

#[test]
fn test_report_rounds_display_values() {
    let report = AlphaReport::build("msft", &snapshot(), ScoreResult::new(60, Vec::new()), CompanyProfile::default());
    assert_eq!(report.price, 123.46);
    assert_eq!(report.rsi, Some(55.56));
    // 3.0 / 123.456 * 100 = 2.4300...
    assert_eq!(report.volatility_pct, Some(2.43));
}

#[test]
fn test_report_keeps_profile_fields() {
    let profile = CompanyProfile {
        company_name: Some("Apple Inc.".to_string()),
        sector: Some("Technology".to_string()),
        market_cap: Some(3.0e12),
        beta: Some(1.24),
    };
    let report = AlphaReport::build("AAPL", &snapshot(), ScoreResult::new(85, Vec::new()), profile);
    assert_eq!(report.company_name, "Apple Inc.");
    assert_eq!(report.sector, "Technology");
    assert_eq!(report.verdict, Verdict::StrongBuy);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["market_cap"], 3.0e12);
    assert_eq!(json["beta"], 1.24);
}

#[test]
fn test_report_missing_indicators_serialize_as_null() {
    let bare = IndicatorSnapshot::new(NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(), 10.0);
    let report = AlphaReport::build("x", &bare, ScoreResult::new(50, Vec::new()), CompanyProfile::default());
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["rsi"].is_null());
    assert!(json["volatility_pct"].is_null());
    assert_eq!(json["verdict"], "HOLD");
}

#[test]
fn test_blank_profile_fields_fall_back() {
    let profile = CompanyProfile {
        company_name: Some("  ".to_string()),
        sector: Some(String::new()),
        market_cap: Some(f64::NAN),
        beta: None,
    };
    let report = AlphaReport::build("spy", &snapshot(), ScoreResult::new(50, Vec::new()), profile);
    assert_eq!(report.company_name, "SPY");
    assert_eq!(report.sector, "Unknown");
    assert!(report.market_cap.is_none());
}
