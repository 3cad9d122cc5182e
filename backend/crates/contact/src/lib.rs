//! Contact Form Module
//!
//! Clean Architecture structure:
//! - `domain/` - Contact message and the `Mailer` port
//! - `application/` - Use case and configuration
//! - `infra/` - SMTP (STARTTLS) mailer
//! - `presentation/` - HTTP handler and router
//!
//! Messages are relayed to a single receiving mailbox. Nothing is stored.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ContactConfig, SmtpSettings};
pub use domain::mailer::Mailer;
pub use error::{ContactError, ContactResult};
pub use infra::smtp::SmtpMailer;
pub use presentation::router::{contact_router, contact_router_generic};
