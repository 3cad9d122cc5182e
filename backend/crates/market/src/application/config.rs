//! Application Configuration

use crate::domain::entities::TrackedAsset;
use crate::infra::coingecko::DEFAULT_BASE_URL;
use std::time::Duration;

/// Market application configuration
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Price API base URL
    pub price_api_url: String,
    /// Deadline for each outbound price request
    pub request_timeout: Duration,
    /// How long a fetched spot price is served without refetching
    pub freshness_window: Duration,
    /// Assets shown on the live price board, in order
    pub tracked_assets: Vec<TrackedAsset>,
    /// History length when none is requested
    pub history_default_days: u32,
    pub history_max_days: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            price_api_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            freshness_window: Duration::from_secs(60),
            tracked_assets: vec![
                TrackedAsset::new("bitcoin", "BTC"),
                TrackedAsset::new("binancecoin", "BNB"),
                TrackedAsset::new("tether", "USDT"),
                TrackedAsset::new("ethereum", "ETH"),
            ],
            history_default_days: 7,
            history_max_days: 365,
        }
    }
}

impl MarketConfig {
    /// Clamp a requested history length into `1..=history_max_days`
    pub fn history_days(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.history_default_days)
            .clamp(1, self.history_max_days)
    }
}
