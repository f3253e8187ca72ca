//! Yahoo Finance market data and fundamentals provider

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::models::price::{PriceBar, PriceSeries};
use crate::models::report::CompanyProfile;
use crate::services::market_data::{
    FundamentalsProvider, Lookback, MarketDataProvider, ProviderError,
};

use super::response::{ChartResponse, ChartResult, QuoteSummaryResponse, RawValue};

const USER_AGENT: &str = concat!("kvant/", env!("CARGO_PKG_VERSION"));
const PROFILE_MODULES: &str = "price,summaryProfile,summaryDetail";

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: Url,
    max_retries: usize,
}

impl YahooFinanceProvider {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self::with_client(&config.market_data_base_url, client)?.with_max_retries(config.max_retries))
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            max_retries: 0,
        })
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Api(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(self.max_retries)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, symbol: &str) -> Result<T, ProviderError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(symbol.to_string()));
        }
        if status.is_server_error() {
            return Err(ProviderError::Upstream(status.as_u16()));
        }
        if !status.is_success() {
            return Err(ProviderError::Api(format!("unexpected status {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::BadResponse(e.to_string()))
    }

    async fn get_with_retry<T: DeserializeOwned>(&self, url: Url, symbol: &str) -> Result<T, ProviderError> {
        let request = || {
            let url = url.clone();
            async move { self.get_json::<T>(url, symbol).await }
        };

        request
            .retry(self.backoff())
            .when(ProviderError::is_transient)
            .notify(|err: &ProviderError, delay: Duration| {
                warn!(symbol = %symbol, error = %err, delay_ms = delay.as_millis() as u64, "Retrying market data request");
            })
            .await
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        lookback: Lookback,
    ) -> Result<PriceSeries, ProviderError> {
        let mut url = self.endpoint(&["v8", "finance", "chart", symbol])?;
        url.query_pairs_mut()
            .append_pair("range", lookback.as_range())
            .append_pair("interval", "1d")
            .append_pair("includeAdjustedClose", "true");

        let body: ChartResponse = self.get_with_retry(url, symbol).await?;

        if let Some(error) = body.chart.error {
            return Err(if error.is_not_found() {
                ProviderError::NotFound(symbol.to_string())
            } else {
                ProviderError::Api(error.message())
            });
        }

        let result = body
            .chart
            .result
            .and_then(|mut results| results.pop())
            .ok_or_else(|| ProviderError::BadResponse("missing chart result".into()))?;

        let series = chart_to_series(result)?;
        debug!(symbol = %symbol, bars = series.len(), "Fetched daily history");
        Ok(series)
    }
}

#[async_trait]
impl FundamentalsProvider for YahooFinanceProvider {
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, ProviderError> {
        let mut url = self.endpoint(&["v10", "finance", "quoteSummary", symbol])?;
        url.query_pairs_mut().append_pair("modules", PROFILE_MODULES);

        let body: QuoteSummaryResponse = self.get_with_retry(url, symbol).await?;

        if let Some(error) = body.quote_summary.error {
            return Err(if error.is_not_found() {
                ProviderError::NotFound(symbol.to_string())
            } else {
                ProviderError::Api(error.message())
            });
        }

        let summary = body
            .quote_summary
            .result
            .and_then(|mut results| results.pop())
            .unwrap_or_default();

        let price = summary.price.unwrap_or_default();
        let detail = summary.summary_detail.unwrap_or_default();

        Ok(CompanyProfile {
            company_name: price.long_name.or(price.short_name),
            sector: summary.summary_profile.and_then(|p| p.sector),
            market_cap: RawValue::value(&price.market_cap).or(RawValue::value(&detail.market_cap)),
            beta: RawValue::value(&detail.beta),
        })
    }
}

/// Convert a chart payload into a validated series.
///
/// Prices are split/dividend adjusted through `adjclose`. Rows with a missing or
/// non-positive price are dropped; when two rows share a date the later one wins.
pub fn chart_to_series(result: ChartResult) -> Result<PriceSeries, ProviderError> {
    let offset = result.meta.map(|m| m.gmtoffset).unwrap_or(0);
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjusted = result.indicators.adjclose.into_iter().next().map(|a| a.adjclose);

    let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten().filter(|v| v.is_finite());

    let mut bars: Vec<PriceBar> = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            at(&quote.open, i),
            at(&quote.high, i),
            at(&quote.low, i),
            at(&quote.close, i),
        ) else {
            continue;
        };
        if open <= 0.0 || high <= 0.0 || low <= 0.0 || close <= 0.0 {
            continue;
        }

        let ratio = adjusted
            .as_deref()
            .and_then(|adj| at(adj, i))
            .filter(|adj| *adj > 0.0)
            .map(|adj| adj / close)
            .unwrap_or(1.0);

        let date = ts
            .checked_add(offset)
            .and_then(|local| DateTime::from_timestamp(local, 0))
            .ok_or_else(|| ProviderError::BadResponse(format!("bad timestamp {} (offset {})", ts, offset)))?
            .date_naive();

        let (open, close) = (open * ratio, close * ratio);
        // Vendor rows occasionally put open/close a hair outside high/low
        let high = (high * ratio).max(open).max(close);
        let low = (low * ratio).min(open).min(close);
        let volume = at(&quote.volume, i).unwrap_or(0.0);

        bars.push(PriceBar::new(date, open, high, low, close, volume));
    }

    bars.sort_by_key(|b| b.date);
    bars.dedup_by(|later, earlier| {
        if later.date == earlier.date {
            *earlier = *later;
            true
        } else {
            false
        }
    });

    Ok(PriceSeries::new(bars)?)
}
