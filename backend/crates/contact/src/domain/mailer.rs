//! Mailer Port
//!
//! Outbound mail delivery. The SMTP implementation lives in the
//! infrastructure layer; tests substitute a stub.

use crate::domain::message::ContactMessage;
use crate::error::ContactResult;

#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Deliver `message` to the receiving mailbox
    async fn send(&self, message: &ContactMessage) -> ContactResult<()>;
}
