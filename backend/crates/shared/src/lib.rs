//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every API module:
//! - Common error types and result aliases
//! - The JSON response envelope (`{success, data, error, ...}`)
//! - Cross-cutting input validation (presence + numeric coercion)
//! - Axum extractors that reject with the envelope instead of plain text
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
#[cfg(feature = "axum")]
pub mod extract;
pub mod validation;
