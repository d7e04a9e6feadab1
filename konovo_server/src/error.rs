//! Maps domain error kinds to transport statuses and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use konovo_lib::{ErrorKind, KonovoError};

/// Wire shape of every error the BFF returns.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub detail: String,
}

/// Response-side wrapper for [`KonovoError`], so handlers can use `?`.
pub struct ApiError(pub KonovoError);

impl From<KonovoError> for ApiError {
    fn from(err: KonovoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details are logged, never sent to the caller.
        let body = if err.kind == ErrorKind::Internal {
            tracing::error!("internal error: {}", err.detail);
            ErrorBody {
                code: "internal_error".to_string(),
                message: "An unexpected error occurred".to_string(),
                detail: "Please try again later".to_string(),
            }
        } else {
            ErrorBody {
                code: err.code,
                message: err.message,
                detail: err.detail,
            }
        };

        (status, Json(body)).into_response()
    }
}
