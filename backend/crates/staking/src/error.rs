//! Staking Error Types
//!
//! Staking-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Staking-specific result type alias
pub type StakingResult<T> = Result<T, StakingError>;

#[derive(Debug, Error)]
pub enum StakingError {
    /// Body or query rejected by shared validation
    #[error(transparent)]
    Rejected(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StakingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StakingError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            StakingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StakingError::Rejected(inner) => inner.kind(),
            StakingError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StakingError::Database(e) => {
                tracing::error!(error = %e, "Staking database error");
            }
            StakingError::Rejected(e) => {
                tracing::debug!(error = %e, "Staking request rejected");
            }
        }
    }
}

impl From<StakingError> for AppError {
    fn from(err: StakingError) -> Self {
        match err {
            StakingError::Rejected(inner) => inner,
            StakingError::Database(e) => {
                AppError::internal("Failed to process pool statistics").with_source(e)
            }
        }
    }
}

impl IntoResponse for StakingError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
