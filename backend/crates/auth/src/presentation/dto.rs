//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::TokenPair;
use crate::domain::entity::User;

const TOKEN_TYPE: &str = "bearer";

/// Response data for POST /api/auth/login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

impl From<TokenPair> for LoginResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: TOKEN_TYPE,
        }
    }
}

/// Response data for POST /api/auth/refresh
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl RefreshResponse {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE,
        }
    }
}

/// Response data for GET /api/auth/me
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub wallet_address: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            wallet_address: user.wallet_address.into_db(),
            created_at: user.created_at,
        }
    }
}
