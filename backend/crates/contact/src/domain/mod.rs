//! Domain Layer

pub mod mailer;
pub mod message;
