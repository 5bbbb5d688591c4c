use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::mx::Error as MxError;
use crate::ratelimit::RateLimitExceeded;
use crate::validator::{FormatError, PolicyError};

/// Request-boundary error. Every failure in the pipeline converts into one
/// of these and then into a JSON body plus status code; nothing is thrown
/// past the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing or invalid 'domain' field")]
    MalformedBody,
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    RateLimited(#[from] RateLimitExceeded),
    #[error(transparent)]
    Mx(#[from] MxError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody | Self::Format(_) | Self::Policy(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Mx(MxError::DomainNotFound | MxError::NoMailServers) => StatusCode::BAD_REQUEST,
            Self::Mx(MxError::LookupTimedOut) => StatusCode::REQUEST_TIMEOUT,
            Self::Mx(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            valid: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
