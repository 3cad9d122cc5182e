//! Infrastructure Layer - Outbound mail

pub mod smtp;
