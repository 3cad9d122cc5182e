//! Bearer Tokens (HS256 JWT)
//!
//! Compact JWS tokens signed with HMAC-SHA256:
//! `base64url(header).base64url(claims).base64url(signature)`.
//!
//! Claims carry the subject, issue/expiry times (unix seconds), a unique id
//! and the token type, so an access token is never accepted where a refresh
//! token is required and vice versa.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

const ALGORITHM: &str = "HS256";

/// Token purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (wallet address)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    /// Unique token id
    pub jti: Uuid,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Token verification failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

impl TokenError {
    /// Machine-readable code for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            Self::Expired => "token_expired",
            Self::Invalid => "invalid_token",
        }
    }
}

/// Issues and verifies HS256 tokens with a shared secret
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for `subject` valid for `ttl` from `now`
    pub fn issue(
        &self,
        subject: &str,
        token_type: TokenType,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> String {
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> String {
        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        };

        // Plain structs of strings and integers always serialize
        let header_json = serde_json::to_vec(&header).unwrap_or_default();
        let claims_json = serde_json::to_vec(claims).unwrap_or_default();

        let signing_input = format!(
            "{}.{}",
            to_base64url(&header_json),
            to_base64url(&claims_json)
        );
        let signature = hmac_sha256(&self.secret, signing_input.as_bytes());

        format!("{}.{}", signing_input, to_base64url(&signature))
    }

    /// Verify signature, expiry and token type
    pub fn verify(
        &self,
        token: &str,
        expected: TokenType,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Invalid);
        };

        let header: Header = from_base64url(header_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Invalid)?;
        if header.alg != ALGORITHM {
            return Err(TokenError::Invalid);
        }

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Invalid)?;
        let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];
        if !verify_hmac_sha256(&self.secret, signing_input.as_bytes(), &signature) {
            return Err(TokenError::Invalid);
        }

        let claims: Claims = from_base64url(claims_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Invalid)?;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        if claims.token_type != expected {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}
