//! Mining Profitability Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profitability model, calculation entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! The calculator is a closed-form function of the submitted hardware
//! parameters and a fixed network model. Nothing is fetched from a live
//! network; every result is persisted as an immutable record.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MiningConfig;
pub use error::{MiningError, MiningResult};
pub use infra::postgres::PgCalculationRepository;
pub use presentation::router::{mining_router, mining_router_generic};
