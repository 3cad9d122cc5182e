//! Market Routers

use crate::application::config::MarketConfig;
use crate::domain::cache::PriceCache;
use crate::domain::source::PriceSource;
use crate::infra::coingecko::CoinGeckoClient;
use crate::presentation::handlers::{self, PricesAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the prices router backed by CoinGecko
pub fn prices_router(source: CoinGeckoClient, config: MarketConfig) -> Router {
    prices_router_generic(source, config)
}

/// Create a generic prices router for any price source
pub fn prices_router_generic<S>(source: S, config: MarketConfig) -> Router
where
    S: PriceSource + Send + Sync + 'static,
{
    let state = PricesAppState {
        cache: Arc::new(PriceCache::new(source, config.freshness_window)),
        config: Arc::new(config),
    };

    Router::new()
        .route("/live", get(handlers::live_prices::<S>))
        .route("/history/{id}", get(handlers::price_history::<S>))
        .with_state(state)
}

/// Create the mock DEX router (static tables, no state)
pub fn dex_router() -> Router {
    Router::new()
        .route("/quote", get(handlers::swap_quote))
        .route("/tokens", get(handlers::tokens))
        .route("/liquidity/{pair}", get(handlers::pair_liquidity))
}
