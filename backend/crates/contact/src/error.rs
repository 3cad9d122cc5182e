//! Contact Error Types
//!
//! Contact-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("name, email and message are required")]
    MissingFields,

    /// No SMTP settings were provided at startup
    #[error("SMTP server not configured")]
    NotConfigured,

    /// Configured sender or receiver is not a valid mailbox
    #[error("Invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// Relay refused the message or could not be reached
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Body rejected by shared validation
    #[error(transparent)]
    Rejected(#[from] AppError),
}

impl ContactError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingFields => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured
            | ContactError::Address(_)
            | ContactError::Build(_)
            | ContactError::Smtp(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ContactError::Rejected(inner) => StatusCode::from_u16(inner.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::MissingFields => ErrorKind::BadRequest,
            ContactError::NotConfigured
            | ContactError::Address(_)
            | ContactError::Build(_)
            | ContactError::Smtp(_) => ErrorKind::InternalServerError,
            ContactError::Rejected(inner) => inner.kind(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContactError::NotConfigured => {
                tracing::error!("Contact form used but SMTP is not configured");
            }
            ContactError::Address(_) | ContactError::Build(_) | ContactError::Smtp(_) => {
                tracing::error!(error = %self, "Failed to send contact email");
            }
            _ => {
                tracing::debug!(error = %self, "Contact request rejected");
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Rejected(inner) => inner,
            ContactError::NotConfigured => {
                AppError::internal("SMTP server not configured on the backend")
            }
            ContactError::Address(e) => AppError::internal("Failed to send message").with_source(e),
            ContactError::Build(e) => AppError::internal("Failed to send message").with_source(e),
            ContactError::Smtp(e) => AppError::internal("Failed to send message").with_source(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
