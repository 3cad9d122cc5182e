//! Domain Layer
//!
//! - `entity/` - User
//! - `value_object/` - WalletAddress
//! - `repository` - persistence traits

pub mod entity;
pub mod repository;
pub mod value_object;
