//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (StakingStats, StatsUpdate)
//! - Domain services (APR display, history series)
//! - Static catalogs (leaderboard, user stakes)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod repository;
pub mod services;
