//! Current User Use Case

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::WalletAddress;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// User for a token subject
    pub async fn execute(&self, subject: &str) -> AuthResult<User> {
        let wallet_address = WalletAddress::from_db(subject);
        self.repo
            .find_by_wallet(&wallet_address)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
