//! HTTP Handlers

use axum::Extension;
use axum::extract::State;
use kernel::envelope::ApiResponse;
use kernel::extract::AppJson;
use kernel::validation::{as_object, coerce_string, optional_field};
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CurrentUserUseCase, LoginInput, LoginUseCase, RefreshTokenUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginResponse, MeResponse, RefreshResponse, UserDto};
use crate::presentation::middleware::Identity;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(body): AppJson<Value>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let body = as_object(&body).map_err(|_| AuthError::MissingCredentials)?;
    let (Some(wallet_address), Some(signature)) = (
        optional_field(body, "wallet_address"),
        optional_field(body, "signature"),
    ) else {
        return Err(AuthError::MissingCredentials);
    };

    let input = LoginInput {
        wallet_address: coerce_string("wallet_address", wallet_address)?,
        signature: coerce_string("signature", signature)?,
    };

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let tokens = use_case.execute(input).await?;

    Ok(ApiResponse::ok(LoginResponse::from(tokens)))
}

/// POST /api/auth/refresh (refresh token required)
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> ApiResponse<RefreshResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let access_token = RefreshTokenUseCase::new(state.config.clone()).execute(&identity.subject);
    ApiResponse::ok(RefreshResponse::new(access_token))
}

/// GET /api/auth/me (access token required)
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> AuthResult<ApiResponse<MeResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(&identity.subject)
        .await?;

    Ok(ApiResponse::ok(MeResponse {
        user: UserDto::from(user),
    }))
}
