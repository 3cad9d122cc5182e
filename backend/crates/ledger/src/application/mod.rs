//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod history;
pub mod log;
pub mod stats;
pub mod status;
