//! Ledger Error Types
//!
//! Ledger-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ledger-specific result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A record with this hash exists already
    #[error("Transaction already recorded")]
    AlreadyRecorded,

    #[error("Transaction not found")]
    NotFound,

    #[error("Hash and status are required")]
    MissingStatusFields,

    /// Body rejected by shared validation
    #[error(transparent)]
    Rejected(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LedgerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::AlreadyRecorded | LedgerError::MissingStatusFields => {
                StatusCode::BAD_REQUEST
            }
            LedgerError::NotFound => StatusCode::NOT_FOUND,
            LedgerError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            LedgerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::AlreadyRecorded | LedgerError::MissingStatusFields => {
                ErrorKind::BadRequest
            }
            LedgerError::NotFound => ErrorKind::NotFound,
            LedgerError::Rejected(inner) => inner.kind(),
            LedgerError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LedgerError::Database(e) => {
                tracing::error!(error = %e, "Ledger database error");
            }
            LedgerError::AlreadyRecorded => {
                tracing::info!("Duplicate transaction hash rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Ledger request rejected");
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Rejected(inner) => inner,
            LedgerError::Database(e) => {
                AppError::internal("Failed to process transaction").with_source(e)
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
