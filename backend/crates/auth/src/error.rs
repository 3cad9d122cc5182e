//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing signature or wallet address")]
    MissingCredentials,

    /// No bearer token on a protected route
    #[error("Authorization token required")]
    TokenRequired,

    /// Bearer token expired, malformed, badly signed or of the wrong type
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Token subject has no user row
    #[error("User not found")]
    UserNotFound,

    /// Body rejected by shared validation (including bad addresses)
    #[error(transparent)]
    Rejected(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::TokenRequired | AuthError::Token(_) => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::TokenRequired | AuthError::Token(_) => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Rejected(inner) => inner.kind(),
            AuthError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code for token failures
    pub fn code(&self) -> Option<&'static str> {
        match self {
            AuthError::TokenRequired => Some("token_required"),
            AuthError::Token(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(TokenError::Invalid) => {
                tracing::warn!("Invalid bearer token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let code = err.code();
        let app_err = match err {
            AuthError::Rejected(inner) => inner,
            AuthError::Database(e) => {
                AppError::internal("Failed to process authentication").with_source(e)
            }
            other => AppError::new(other.kind(), other.to_string()),
        };
        match code {
            Some(code) => app_err.with_code(code),
            None => app_err,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
