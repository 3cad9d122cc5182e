//! Mining Router

use crate::application::config::MiningConfig;
use crate::domain::repository::CalculationRepository;
use crate::infra::postgres::PgCalculationRepository;
use crate::presentation::handlers::{self, MiningAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the mining router with PostgreSQL repository
pub fn mining_router(repo: PgCalculationRepository, config: MiningConfig) -> Router {
    mining_router_generic(repo, config)
}

/// Create a generic mining router for any repository implementation
pub fn mining_router_generic<R>(repo: R, config: MiningConfig) -> Router
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let state = MiningAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/calculate", post(handlers::calculate::<R>))
        .route("/equipment", get(handlers::equipment))
        .route("/difficulty", get(handlers::difficulty))
        .route("/history/{address}", get(handlers::history::<R>))
        .with_state(state)
}
