//! Contact Message

/// A submitted contact form, ready to relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    /// Address the visitor wants replies on (not validated)
    pub email: String,
    /// Full subject line, prefix included
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Plain-text body sent to the receiving mailbox
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
            self.name, self.email, self.message
        )
    }
}
