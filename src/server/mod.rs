//! HTTP surface: router, shared state, and the request pipeline.

mod error;
mod routes;
mod state;
mod types;

use std::sync::Arc;

use axum::http::header::{self, HeaderValue, InvalidHeaderValue};
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::AppState;
pub use types::{ErrorResponse, HealthResponse, ValidateRequest, ValidateResponse};

use crate::mx::LookupMx;

/// Build the application router over the given state.
pub fn router<R>(state: Arc<AppState<R>>, cors: CorsLayer) -> Router
where
    R: LookupMx + 'static,
{
    Router::new()
        .route("/api/validate-email-mx", post(routes::validate_handler::<R>))
        .route("/api/health", get(routes::health_handler::<R>))
        .layer(cors)
        .with_state(state)
}

/// CORS allow-list with credentials, for browser clients on the configured
/// development origins.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
