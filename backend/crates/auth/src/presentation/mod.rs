//! Presentation Layer
//!
//! HTTP handlers, DTOs, and middleware for the API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
