//! Transaction Ledger Module
//!
//! Clean Architecture structure:
//! - `domain/` - Transaction entity, pagination, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! Records on-chain transactions reported by the frontend. Hashes are unique;
//! records are never deleted, only their status changes.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use infra::postgres::PgTransactionRepository;
pub use presentation::router::{ledger_router, ledger_router_generic};

#[cfg(test)]
mod tests;
