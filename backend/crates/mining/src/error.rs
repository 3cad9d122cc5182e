//! Mining Error Types
//!
//! Mining-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Mining-specific result type alias
pub type MiningResult<T> = Result<T, MiningError>;

#[derive(Debug, Error)]
pub enum MiningError {
    /// Parameter present but outside its domain (e.g. difficulty <= 0)
    #[error("{0}")]
    InvalidParameter(String),

    /// Body rejected by shared validation (missing or non-numeric field)
    #[error(transparent)]
    Rejected(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MiningError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MiningError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            MiningError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            MiningError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MiningError::InvalidParameter(_) => ErrorKind::BadRequest,
            MiningError::Rejected(inner) => inner.kind(),
            MiningError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MiningError::Database(e) => {
                tracing::error!(error = %e, "Mining database error");
            }
            _ => {
                tracing::debug!(error = %self, "Mining request rejected");
            }
        }
    }
}

impl From<MiningError> for AppError {
    fn from(err: MiningError) -> Self {
        match err {
            MiningError::Rejected(inner) => inner,
            MiningError::InvalidParameter(message) => AppError::bad_request(message),
            MiningError::Database(e) => {
                AppError::internal("Failed to process mining calculation").with_source(e)
            }
        }
    }
}

impl IntoResponse for MiningError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
