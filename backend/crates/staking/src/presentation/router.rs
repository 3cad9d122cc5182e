//! Staking Router

use crate::application::config::StakingConfig;
use crate::domain::repository::StakingStatsRepository;
use crate::infra::postgres::PgStakingStatsRepository;
use crate::presentation::handlers::{self, StakingAppState};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

/// Create the staking router with PostgreSQL repository
pub fn staking_router(repo: PgStakingStatsRepository, config: StakingConfig) -> Router {
    staking_router_generic(repo, config)
}

/// Create a generic staking router for any repository implementation
pub fn staking_router_generic<R>(repo: R, config: StakingConfig) -> Router
where
    R: StakingStatsRepository + Clone + Send + Sync + 'static,
{
    let state = StakingAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/stats", get(handlers::stats::<R>))
        .route("/update_stats", put(handlers::update_stats::<R>))
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/history", get(handlers::history::<R>))
        .route("/user_stakes/{address}", get(handlers::user_stakes))
        .with_state(state)
}
