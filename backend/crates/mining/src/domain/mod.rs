//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (MiningCalculation)
//! - Domain value objects (MiningParameters, NetworkModel)
//! - Domain services (profitability calculator)
//! - Static catalogs (equipment, network difficulty)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
