//! Application Layer - Use Cases

pub mod config;
pub mod prices;
pub mod quote;
