//! Infrastructure Layer - Database implementations

pub mod postgres;
