//! Mapping of handler failures to HTTP responses.
//!
//! - Upstream failures mirror the upstream status with an empty body
//! - Invalid create input is a 400 with the reason as text
//! - Malformed JSON keeps axum's own rejection status

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::employees::InputError;
use crate::upstream::UpstreamError;

/// Every way a facade handler can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Rejected(#[from] JsonRejection),

    #[error("no employees available")]
    NoEmployees,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => {
                let status = e.status_code();
                tracing::warn!(error = %e, status = %status, "Upstream call failed");
                status.into_response()
            }
            ApiError::InvalidInput(e) => {
                tracing::debug!(error = %e, "Rejected create input");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            ApiError::Rejected(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                rejection.into_response()
            }
            ApiError::NoEmployees => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
