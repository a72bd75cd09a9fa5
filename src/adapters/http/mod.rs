//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`build_router`] assembles them behind the shared middleware stack.

pub mod health;
pub mod intake;

pub use intake::{intake_routes, IntakeHandlers};

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with tracing, timeout and CORS layers.
///
/// An empty `cors_origins` list allows any origin. Origins that fail to
/// parse are skipped with a warning.
pub fn build_router(
    handlers: IntakeHandlers,
    request_timeout: Duration,
    cors_origins: &[String],
) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/intake/sessions", intake_routes(handlers))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(allowed)
}
