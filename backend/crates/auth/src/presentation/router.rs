//! Auth Router

use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use platform::rate_limit::{MemoryRateLimitStore, RateLimiter, enforce_rate_limit};
use platform::token::TokenType;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{BearerAuthState, require_bearer};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Login and refresh share one per-client limiter; bearer checks run inside it.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let signer = Arc::new(config.signer());
    let limiter = RateLimiter::new(
        Arc::new(MemoryRateLimitStore::new()),
        "auth",
        config.rate_limits.clone(),
    )
    .trust_forwarded(config.trust_forwarded);
    let rate_limit = from_fn_with_state(limiter, enforce_rate_limit::<MemoryRateLimitStore>);

    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let login = Router::new().route("/login", post(handlers::login::<R>));

    let refresh = Router::new()
        .route("/refresh", post(handlers::refresh::<R>))
        .route_layer(from_fn_with_state(
            BearerAuthState::new(signer.clone(), TokenType::Refresh),
            require_bearer,
        ));

    let me = Router::new()
        .route("/me", get(handlers::me::<R>))
        .route_layer(from_fn_with_state(
            BearerAuthState::new(signer, TokenType::Access),
            require_bearer,
        ));

    login
        .merge(refresh)
        .route_layer(rate_limit)
        .merge(me)
        .with_state(state)
}
