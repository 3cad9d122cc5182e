//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod current_user;
pub mod login;
pub mod refresh;

pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase, TokenPair};
pub use refresh::RefreshTokenUseCase;
