//! Refresh Token Use Case

use chrono::Utc;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use platform::token::TokenType;

/// Issues a fresh access token for an already verified refresh token subject
pub struct RefreshTokenUseCase {
    config: Arc<AuthConfig>,
}

impl RefreshTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, subject: &str) -> String {
        self.config.signer().issue(
            subject,
            TokenType::Access,
            self.config.access_token_ttl,
            Utc::now(),
        )
    }
}
