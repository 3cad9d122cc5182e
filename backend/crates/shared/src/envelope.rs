//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//! `{"success": bool, "data"?: ..., "message"?: ..., "error"?: ..., "code"?: ..., "timestamp"?: int}`.

use chrono::Utc;
use serde::Serialize;
use std::borrow::Cow;

/// Successful response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: None,
        }
    }

    /// Stamp the envelope with the current unix time
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(Utc::now().timestamp());
        self
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Success envelope carrying only a message
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            timestamp: None,
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

/// Failure body, rendered by `AppError`'s `IntoResponse`
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

impl<'a> ErrorBody<'a> {
    pub fn new(error: &'a str, code: Option<&'a str>) -> Self {
        Self {
            success: false,
            error,
            code,
        }
    }
}
