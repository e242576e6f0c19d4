//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"detail": "..."}` with a status derived
//! from the underlying error. Server-side failures are logged and reported
//! with a generic detail.

use accord_core::errors::CoreError;
use accord_core::responses::ErrorDetail;
use accord_db::error::DatabaseError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be extracted (bad path, query string or body).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(DatabaseError::NotFound { .. }) | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Database(DatabaseError::Constraint(_)) => StatusCode::CONFLICT,
            Self::Database(DatabaseError::Core(e)) | Self::Core(e) => core_status(e),
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }
}

const fn core_status(error: &CoreError) -> StatusCode {
    match error {
        CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::InvalidSort { .. } => StatusCode::BAD_REQUEST,
        CoreError::UnknownResource(_) => StatusCode::NOT_FOUND,
        CoreError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}
