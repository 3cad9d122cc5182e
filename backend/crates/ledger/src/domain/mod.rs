//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Transaction, TransactionStats)
//! - Domain value objects (Pagination, HistoryFilter)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
