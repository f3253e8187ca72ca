//! Test utilities for API server integration tests

use axum_test::TestServer;
use kvant::core::http::{create_router, AppState};
use kvant::metrics::Metrics;
use kvant::services::AlphaService;
use std::sync::Arc;
use std::time::Instant;
use wiremock::MockServer;

use crate::test_utils::provider_for;

/// HTTP server wired to a Yahoo Finance mock.
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub yahoo: MockServer,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let yahoo = MockServer::start().await;
        let provider = Arc::new(provider_for(&yahoo));

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            service: Arc::new(AlphaService::from_provider(provider)),
            default_symbol: "SPY".to_string(),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            yahoo,
        }
    }
}
