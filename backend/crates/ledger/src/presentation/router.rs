//! Ledger Router

use crate::application::config::LedgerConfig;
use crate::domain::repository::TransactionRepository;
use crate::infra::postgres::PgTransactionRepository;
use crate::presentation::handlers::{self, LedgerAppState};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Create the ledger router with PostgreSQL repository
pub fn ledger_router(repo: PgTransactionRepository, config: LedgerConfig) -> Router {
    ledger_router_generic(repo, config)
}

/// Create a generic ledger router for any repository implementation
pub fn ledger_router_generic<R>(repo: R, config: LedgerConfig) -> Router
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let state = LedgerAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/log", post(handlers::log_transaction::<R>))
        .route("/history/{address}", get(handlers::history::<R>))
        .route("/stats", get(handlers::stats::<R>))
        .route("/update_status", put(handlers::update_status::<R>))
        .with_state(state)
}
