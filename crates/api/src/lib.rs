//! # SIHRA API
//!
//! HTTP service that serves laid-out weekly timetables to the SIHRA front
//! end. It holds no data of its own: every request is answered by calling
//! the SIHRA REST API with the caller's bearer credential.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Fetch, lay out and respond
//! - **Middleware**: Credential extraction and error mapping
//! - **Config**: Environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use sihra_client::ClientConfig;
use sihra_core::schedule::GridConfig;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds the upstream connection pool and layout settings. Nothing here is
/// tied to a caller; credentials travel with each request.
pub struct ApiState {
    /// Connection pool to the SIHRA API, shared by all callers
    pub http: reqwest::Client,
    /// Base URL of the SIHRA API
    pub upstream_base_url: String,
    /// Layout of the weekly grid
    pub grid: GridConfig,
}

impl ApiState {
    pub fn new(client: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(client.request_timeout)
            .build()
            .wrap_err("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            upstream_base_url: client.base_url.clone(),
            grid: client.grid,
        })
    }
}

/// Build the application router with all routes
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Timetable endpoints
        .merge(routes::timetable::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Parse configured origins, dropping values a credentialed CORS policy
/// cannot list.
fn cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                warn!("Ignoring wildcard CORS origin; credentialed requests need explicit origins");
                return None;
            }
            match origin.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            }
        })
        .collect()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(cors_origins(origins))
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration
///
/// This function initializes logging, configures routes and middleware,
/// and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(&config.client)?);
    info!("Using SIHRA API at {}", state.upstream_base_url);

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn origins(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_cors_origins_drop_wildcard() {
        let parsed = cors_origins(&origins(&["*", "https://sihra.edu", " * "]));
        assert_eq!(parsed, vec![HeaderValue::from_static("https://sihra.edu")]);
    }

    #[test]
    fn test_cors_origins_drop_invalid_values() {
        let parsed = cors_origins(&origins(&["https://a.sihra.edu", "bad\norigin"]));
        assert_eq!(parsed, vec![HeaderValue::from_static("https://a.sihra.edu")]);
    }

    #[test]
    fn test_cors_layer_builds_from_wildcard_setting() {
        let _layer = cors_layer(&origins(&["*", "https://sihra.edu"]));
    }
}
