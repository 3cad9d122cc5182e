//! Send Contact Message Use Case

use std::sync::Arc;

use crate::application::config::ContactConfig;
use crate::domain::mailer::Mailer;
use crate::domain::message::ContactMessage;
use crate::error::{ContactError, ContactResult};

/// Raw form fields
#[derive(Debug, Default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

pub struct SendContactUseCase<M>
where
    M: Mailer,
{
    mailer: Option<Arc<M>>,
    config: Arc<ContactConfig>,
}

impl<M> SendContactUseCase<M>
where
    M: Mailer,
{
    pub fn new(mailer: Option<Arc<M>>, config: Arc<ContactConfig>) -> Self {
        Self { mailer, config }
    }

    pub async fn execute(&self, input: ContactInput) -> ContactResult<()> {
        let (Some(name), Some(email), Some(message)) = (
            non_blank(input.name),
            non_blank(input.email),
            non_blank(input.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        let mailer = self.mailer.as_ref().ok_or(ContactError::NotConfigured)?;

        let message = ContactMessage {
            subject: self.config.subject_line(input.subject.as_deref()),
            name,
            email,
            message,
        };
        mailer.send(&message).await?;

        tracing::info!(subject = %message.subject, "Contact message relayed");
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
