//! Staking Pool Module
//!
//! Clean Architecture structure:
//! - `domain/` - Pool statistics, history series, static showcase tables
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! Pool statistics live in a single row created on first access. The
//! leaderboard, user stakes and history are showcase data.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StakingConfig;
pub use error::{StakingError, StakingResult};
pub use infra::postgres::PgStakingStatsRepository;
pub use presentation::router::{staking_router, staking_router_generic};

#[cfg(test)]
mod tests;
