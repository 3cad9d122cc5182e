//! Application Layer - Use Cases

pub mod config;
pub mod send;

pub use send::{ContactInput, SendContactUseCase};
