//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod calculate;
pub mod config;
pub mod history;
