//! Login Use Case
//!
//! Exchanges a wallet address for a token pair, creating the user on first
//! login.

use chrono::Utc;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::WalletAddress;
use crate::error::AuthResult;
use platform::token::TokenType;

/// Login input
pub struct LoginInput {
    pub wallet_address: String,
    /// Accepted as-is
    pub signature: String,
}

/// Issued tokens
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<TokenPair> {
        let wallet_address = WalletAddress::new(&input.wallet_address)?;

        let user = self.repo.get_or_create(&wallet_address).await?;

        let signer = self.config.signer();
        let now = Utc::now();
        let subject = user.wallet_address.as_str();
        let tokens = TokenPair {
            access_token: signer.issue(
                subject,
                TokenType::Access,
                self.config.access_token_ttl,
                now,
            ),
            refresh_token: signer.issue(
                subject,
                TokenType::Refresh,
                self.config.refresh_token_ttl,
                now,
            ),
        };

        tracing::info!(
            user_id = user.id,
            signature_len = input.signature.len(),
            "Wallet login"
        );

        Ok(tokens)
    }
}
