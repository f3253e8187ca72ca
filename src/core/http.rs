//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::metrics::Metrics;
use crate::services::analysis::{AlphaService, AnalysisError};
use crate::services::yahoo::YahooFinanceProvider;

pub const NO_SCORE_MESSAGE: &str = "no score available for this ticker";

/// Reported by `/health` while the process is serving.
pub const HEALTHY: &str = "healthy";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub service: Arc<AlphaService>,
    pub default_symbol: String,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": HEALTHY,
        "uptime_seconds": uptime_seconds,
        "service": "kvant-alpha-score"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct ScoreQuery {
    ticker: Option<String>,
}

/// Score the `ticker` query parameter, or the default symbol when it is absent
async fn score_query(State(state): State<AppState>, Query(params): Query<ScoreQuery>) -> Response {
    let ticker = params
        .ticker
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| state.default_symbol.clone());
    score_ticker(&state, &ticker).await
}

async fn score_symbol(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    score_ticker(&state, &symbol).await
}

async fn score_ticker(state: &AppState, ticker: &str) -> Response {
    match state.service.analyze(ticker).await {
        Ok(report) => {
            state.metrics.record_score(report.verdict);
            Json(report).into_response()
        }
        Err(e) => {
            state.metrics.record_failure();
            analysis_error_response(&e)
        }
    }
}

fn analysis_error_response(err: &AnalysisError) -> Response {
    let status = match err {
        AnalysisError::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
        AnalysisError::NoData { .. } | AnalysisError::Provider { .. } => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(json!({
            "symbol": err.symbol(),
            "error": NO_SCORE_MESSAGE,
        })),
    )
        .into_response()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/score", get(score_query))
        .route("/api/score/{symbol}", get(score_symbol))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(YahooFinanceProvider::new(&config)?);

    let state = AppState {
        metrics,
        start_time: Arc::new(Instant::now()),
        service: Arc::new(AlphaService::from_provider(provider)),
        default_symbol: config.default_symbol.clone(),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
