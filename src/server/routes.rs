use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use tracing::{debug, error, warn};

use super::error::ApiError;
use super::state::AppState;
use super::types::{HealthResponse, ValidateRequest, ValidateResponse};
use crate::mx::{self, Error as MxError, LookupMx};
use crate::validator;

/// POST /api/validate-email-mx
///
/// Linear pipeline: rate check, format check, policy check, MX resolution.
/// The first failing stage short-circuits into the error response; the DNS
/// call is the only await point.
pub(crate) async fn validate_handler<R>(
    State(state): State<Arc<AppState<R>>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError>
where
    R: LookupMx + 'static,
{
    let client = addr.ip().to_string();
    state.limiter.check(&client).map_err(|err| {
        warn!(%client, "rate limit exceeded");
        err
    })?;

    let Json(request) = payload.map_err(|_| ApiError::MalformedBody)?;

    let ascii = validator::validate_format(&request.domain)?;
    validator::check_policy(&ascii)?;

    let records = mx::resolve_mx(&state.resolver, &ascii, state.resolver_timeout)
        .await
        .map_err(|err| {
            if let MxError::ResolverUnavailable { source } = &err {
                error!(domain = %ascii, error = %source, "mx lookup failed");
            } else {
                debug!(domain = %ascii, %err, "mx lookup rejected domain");
            }
            err
        })?;

    debug!(domain = %ascii, records = records.len(), "domain validated");
    Ok(Json(ValidateResponse::new(records)))
}

/// GET /api/health
pub(crate) async fn health_handler<R>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<HealthResponse>
where
    R: LookupMx + 'static,
{
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
    })
}
