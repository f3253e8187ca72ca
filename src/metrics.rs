//! Prometheus metrics for the HTTP surface and the scoring pipeline.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::score::Verdict;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub scores_computed_total: IntCounterVec,
    pub score_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let scores_computed_total = IntCounterVec::new(
            Opts::new("scores_computed_total", "Alpha scores computed, by verdict"),
            &["verdict"],
        )?;
        let score_failures_total = IntCounter::new(
            "score_failures_total",
            "Requests that ended without a score",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(scores_computed_total.clone()))?;
        registry.register(Box::new(score_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            scores_computed_total,
            score_failures_total,
        })
    }

    pub fn record_score(&self, verdict: Verdict) {
        self.scores_computed_total
            .with_label_values(&[verdict.code()])
            .inc();
    }

    pub fn record_failure(&self) {
        self.score_failures_total.inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
