//! SMTP Mailer
//!
//! Submission over STARTTLS with login credentials. The login mailbox is the
//! sender; the visitor's address goes in `Reply-To` when it parses.

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::application::config::SmtpSettings;
use crate::domain::mailer::Mailer;
use crate::domain::message::ContactMessage;
use crate::error::ContactResult;

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Build the relay transport; no connection is made until the first send
    pub fn new(settings: &SmtpSettings) -> ContactResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport,
            from: settings.username.parse()?,
            to: settings.receiver.parse()?,
        })
    }

    fn build_message(&self, message: &ContactMessage) -> ContactResult<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN);
        if let Ok(reply_to) = message.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.body(message.body())?)
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> ContactResult<()> {
        let email = self.build_message(message)?;
        self.transport.send(email).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings::new("smtp.example.com", "bot@example.com", "secret")
    }

    fn message(email: &str) -> ContactMessage {
        ContactMessage {
            name: "Amina".to_string(),
            email: email.to_string(),
            subject: "[GreenHash Maroc] Hello".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_message_headers() {
        let mailer = SmtpMailer::new(&settings()).unwrap();
        let raw = String::from_utf8(
            mailer
                .build_message(&message("amina@example.com"))
                .unwrap()
                .formatted(),
        )
        .unwrap();

        assert!(raw.contains("From: bot@example.com"));
        assert!(raw.contains("To: bot@example.com"));
        assert!(raw.contains("Reply-To: amina@example.com"));
        assert!(raw.contains("Subject: [GreenHash Maroc] Hello"));
    }

    #[tokio::test]
    async fn test_unparseable_visitor_address_is_not_reply_to() {
        let mailer = SmtpMailer::new(&settings()).unwrap();
        let raw = String::from_utf8(
            mailer
                .build_message(&message("not an address"))
                .unwrap()
                .formatted(),
        )
        .unwrap();

        assert!(!raw.contains("Reply-To"));
    }

    #[tokio::test]
    async fn test_invalid_receiver_rejected() {
        let mut settings = settings();
        settings.receiver = "nobody".to_string();
        assert!(SmtpMailer::new(&settings).is_err());
    }
}
