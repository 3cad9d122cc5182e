//! HTTP Handlers

use axum::extract::State;
use kernel::envelope::ApiResponse;
use kernel::extract::AppJson;
use kernel::validation::{as_object, optional_string};
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::ContactConfig;
use crate::application::{ContactInput, SendContactUseCase};
use crate::domain::mailer::Mailer;
use crate::error::ContactResult;

/// Shared state for the contact handler
pub struct ContactAppState<M>
where
    M: Mailer + Send + Sync + 'static,
{
    pub mailer: Option<Arc<M>>,
    pub config: Arc<ContactConfig>,
}

impl<M> Clone for ContactAppState<M>
where
    M: Mailer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/contact/
pub async fn send_message<M>(
    State(state): State<ContactAppState<M>>,
    AppJson(body): AppJson<Value>,
) -> ContactResult<ApiResponse<()>>
where
    M: Mailer + Send + Sync + 'static,
{
    let body = as_object(&body)?;
    let input = ContactInput {
        name: optional_string(body, "name")?,
        email: optional_string(body, "email")?,
        subject: optional_string(body, "subject")?,
        message: optional_string(body, "message")?,
    };

    SendContactUseCase::new(state.mailer.clone(), state.config.clone())
        .execute(input)
        .await?;

    Ok(ApiResponse::message("Your message has been sent successfully"))
}
