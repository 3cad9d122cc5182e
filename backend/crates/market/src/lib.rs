//! Market Data Module
//!
//! Clean Architecture structure:
//! - `domain/` - Price and quote types, the `PriceSource` port, the price cache
//! - `application/` - Use cases
//! - `infra/` - CoinGecko HTTP adapter
//! - `presentation/` - HTTP handlers
//!
//! Live spot prices come from a third-party API through a freshness-window
//! cache. Swap quotes, token and liquidity data are static tables; no real
//! exchange is contacted.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MarketConfig;
pub use domain::cache::PriceCache;
pub use domain::source::PriceSource;
pub use error::{MarketError, MarketResult};
pub use infra::coingecko::CoinGeckoClient;
pub use presentation::router::{dex_router, prices_router, prices_router_generic};
