//! Price Use Cases

use crate::application::config::MarketConfig;
use crate::domain::cache::PriceCache;
use crate::domain::catalog::{HOUSE_TOKEN_SYMBOL, house_token_quote};
use crate::domain::entities::{PriceHistory, SpotPrice};
use crate::domain::source::PriceSource;
use crate::error::{MarketError, MarketResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Live price board: tracked assets through the cache plus the house token
pub struct LivePricesUseCase<S>
where
    S: PriceSource + Send + Sync,
{
    cache: Arc<PriceCache<S>>,
    config: Arc<MarketConfig>,
}

impl<S> LivePricesUseCase<S>
where
    S: PriceSource + Send + Sync,
{
    pub fn new(cache: Arc<PriceCache<S>>, config: Arc<MarketConfig>) -> Self {
        Self { cache, config }
    }

    /// Assets with no data are left out of the board
    pub async fn execute(&self) -> BTreeMap<String, SpotPrice> {
        let mut board = BTreeMap::new();

        for asset in &self.config.tracked_assets {
            if let Some(price) = self.cache.spot(&asset.id).await {
                board.insert(asset.symbol.clone(), price);
            }
        }

        board.insert(
            HOUSE_TOKEN_SYMBOL.to_string(),
            house_token_quote(chrono::Utc::now().timestamp()),
        );
        board
    }
}

/// Daily price history, straight from the source
pub struct PriceHistoryUseCase<S>
where
    S: PriceSource + Send + Sync,
{
    cache: Arc<PriceCache<S>>,
    config: Arc<MarketConfig>,
}

impl<S> PriceHistoryUseCase<S>
where
    S: PriceSource + Send + Sync,
{
    pub fn new(cache: Arc<PriceCache<S>>, config: Arc<MarketConfig>) -> Self {
        Self { cache, config }
    }

    pub async fn execute(&self, asset_id: &str, days: Option<u32>) -> MarketResult<PriceHistory> {
        if !is_valid_asset_id(asset_id) {
            return Err(MarketError::InvalidAssetId(asset_id.to_string()));
        }
        let days = self.config.history_days(days);
        self.cache.source().fetch_history(asset_id, days).await
    }
}

/// Price API ids are lower-case slugs such as `binancecoin` or `usd-coin`
fn is_valid_asset_id(asset_id: &str) -> bool {
    !asset_id.is_empty()
        && asset_id.len() <= 64
        && asset_id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_validation() {
        assert!(is_valid_asset_id("bitcoin"));
        assert!(is_valid_asset_id("usd-coin"));
        assert!(!is_valid_asset_id(""));
        assert!(!is_valid_asset_id("Bitcoin"));
        assert!(!is_valid_asset_id("../etc"));
        assert!(!is_valid_asset_id("btc?x=1"));
    }
}
