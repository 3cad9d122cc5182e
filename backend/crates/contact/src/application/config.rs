//! Application Configuration

use std::time::Duration;

/// SMTP relay settings
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    /// STARTTLS submission port (587)
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Mailbox receiving contact messages
    pub receiver: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("receiver", &self.receiver)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SmtpSettings {
    pub const DEFAULT_PORT: u16 = 587;

    /// Settings that deliver to the login mailbox
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let username = username.into();
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            receiver: username.clone(),
            username,
            password: password.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Contact application configuration
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// `None` leaves the form answering 500
    pub smtp: Option<SmtpSettings>,
    pub subject_prefix: String,
    /// Subject used when the visitor gives none
    pub default_subject: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            smtp: None,
            subject_prefix: "[GreenHash Maroc]".to_string(),
            default_subject: "New message from the contact form".to_string(),
        }
    }
}

impl ContactConfig {
    pub fn subject_line(&self, subject: Option<&str>) -> String {
        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_subject);
        format!("{} {}", self.subject_prefix, subject)
    }
}
