//! Domain Layer
//!
//! This layer contains:
//! - Market entities (SpotPrice, PriceHistory, SwapQuote)
//! - The `PriceSource` port and the freshness-window `PriceCache`
//! - Static exchange tables (rates, tokens, liquidity)
//! - Quote computation

pub mod cache;
pub mod catalog;
pub mod entities;
pub mod services;
pub mod source;
