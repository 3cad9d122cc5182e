//! Domain Entities

use serde::Serialize;

/// Spot quote for one asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotPrice {
    pub usd: f64,
    pub eur: f64,
    /// Percent over 24h
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    /// Unix seconds
    pub last_updated: i64,
}

/// One point of a daily price series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    /// Unix milliseconds
    pub timestamp: i64,
    pub price: f64,
}

/// Daily series returned by the price source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    pub prices: Vec<PricePoint>,
    /// `[timestamp_ms, value]` pairs, passed through unchanged
    pub market_caps: Vec<(f64, f64)>,
    pub total_volumes: Vec<(f64, f64)>,
}

/// An asset tracked on the live price board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    /// Price API id, e.g. `bitcoin`
    pub id: String,
    /// Display symbol, e.g. `BTC`
    pub symbol: String,
}

impl TrackedAsset {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// Computed swap quote
#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    pub from_symbol: String,
    pub to_symbol: String,
    pub amount_in: f64,
    pub rate: f64,
    pub output: f64,
    pub fee: f64,
    pub amount_out: f64,
    pub minimum_received: f64,
}
