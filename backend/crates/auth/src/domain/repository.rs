//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::User;
use crate::domain::value_object::WalletAddress;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find the user for `wallet_address`, creating it when absent
    async fn get_or_create(&self, wallet_address: &WalletAddress) -> AuthResult<User>;

    /// Find user by wallet address
    async fn find_by_wallet(&self, wallet_address: &WalletAddress) -> AuthResult<Option<User>>;
}
