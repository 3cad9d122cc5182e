//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;
use platform::rate_limit::RateLimitConfig;
use platform::token::TokenSigner;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for bearer tokens
    pub token_secret: Vec<u8>,
    /// Access token lifetime (1 hour)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (30 days)
    pub refresh_token_ttl: Duration,
    /// Per-client limits on login and refresh; empty disables them
    pub rate_limits: Vec<RateLimitConfig>,
    /// Key rate limits on `X-Forwarded-For` (behind a trusted proxy only)
    pub trust_forwarded: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("rate_limits", &self.rate_limits)
            .field("trust_forwarded", &self.trust_forwarded)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            access_token_ttl: Duration::hours(1),
            refresh_token_ttl: Duration::days(30),
            rate_limits: vec![RateLimitConfig::per_minute(5)],
            trust_forwarded: false,
        }
    }
}

impl AuthConfig {
    /// Create config with the given token secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(self.token_secret.clone())
    }
}
