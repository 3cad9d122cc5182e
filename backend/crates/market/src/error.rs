//! Market Error Types
//!
//! Market-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Missing parameters: fromToken, toToken, amount")]
    MissingQuoteParams,

    #[error("amount must be a positive number")]
    InvalidAmount,

    #[error("Unsupported pair: {0}")]
    UnsupportedPair(String),

    #[error("Pair not found: {0}")]
    PairNotFound(String),

    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    /// Price API answered with a non-success status
    #[error("Price API returned status {0}")]
    UpstreamStatus(u16),

    /// Price API unreachable, timed out, or sent an unreadable body
    #[error("Price API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Query string rejected by the shared extractor
    #[error(transparent)]
    Rejected(#[from] AppError),
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::MissingQuoteParams
            | MarketError::InvalidAmount
            | MarketError::UnsupportedPair(_)
            | MarketError::InvalidAssetId(_) => StatusCode::BAD_REQUEST,
            MarketError::PairNotFound(_) => StatusCode::NOT_FOUND,
            MarketError::UpstreamStatus(_) | MarketError::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            MarketError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::MissingQuoteParams
            | MarketError::InvalidAmount
            | MarketError::UnsupportedPair(_)
            | MarketError::InvalidAssetId(_) => ErrorKind::BadRequest,
            MarketError::PairNotFound(_) => ErrorKind::NotFound,
            MarketError::UpstreamStatus(_) | MarketError::Http(_) => {
                ErrorKind::InternalServerError
            }
            MarketError::Rejected(inner) => inner.kind(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketError::UpstreamStatus(status) => {
                tracing::error!(status = status, "Price API returned an error status");
            }
            MarketError::Http(e) => {
                tracing::error!(error = %e, "Price API request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Market request rejected");
            }
        }
    }
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::Rejected(inner) => inner,
            MarketError::Http(e) => AppError::internal("Failed to fetch price data").with_source(e),
            MarketError::UpstreamStatus(_) => AppError::internal("Failed to fetch price data"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
