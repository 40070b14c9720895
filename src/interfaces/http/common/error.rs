//! Domain-error to HTTP mapping
//!
//! Handlers return `Result<_, ApiError>` and propagate service failures with
//! `?`. Device failures are reported as 400: the fault is on the far side of
//! the wire, not in this server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::domain::DomainError;

use super::ApiResponse;

pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::DeviceUnreachable(_) | DomainError::DeviceError(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self.0);
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(e: DomainError) -> StatusCode {
        ApiError(e).into_response().status()
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            status_of(DomainError::not_found("gate", 7)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::DeviceUnreachable("down".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Storage("db".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
