//! Kvant API Server
//!
//! Stateless HTTP API returning the alpha score and verdict for a ticker.
//! Each request is an independent computation, so the service scales horizontally.

use dotenvy::dotenv;
use kvant::config::Config;
use kvant::core::http::start_server;
use kvant::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env();
    logging::init_logging(config.log_format());

    let port = config.port;

    info!("Starting Kvant API Server");
    info!(environment = %config.environment, "Environment");
    info!(market_data = %config.market_data_base_url, "Market data provider");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
