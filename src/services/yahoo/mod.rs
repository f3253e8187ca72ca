//! Yahoo Finance HTTP provider (chart v8 and quoteSummary v10 endpoints).

pub mod provider;
pub mod response;

pub use provider::{chart_to_series, YahooFinanceProvider};
