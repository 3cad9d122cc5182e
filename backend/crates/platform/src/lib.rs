//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64url)
//! - HS256 JSON Web Tokens
//! - Client identification from request headers
//! - Rate limiting infrastructure and middleware
//! - In-process TTL caching

pub mod cache;
pub mod client;
pub mod crypto;
pub mod rate_limit;
pub mod token;
