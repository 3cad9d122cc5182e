//! Presentation Layer

pub mod handlers;
pub mod router;
