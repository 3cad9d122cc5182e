//! Price Cache
//!
//! Wraps a [`PriceSource`] with a per-asset freshness window. A hit inside
//! the window never touches the source; a miss performs exactly one fetch and
//! overwrites the entry. Failed fetches are logged and yield `None`, and
//! nothing is cached for them.

use crate::domain::entities::SpotPrice;
use crate::domain::source::PriceSource;
use platform::cache::TtlCache;
use std::time::Duration;

pub struct PriceCache<S> {
    source: S,
    entries: TtlCache<String, SpotPrice>,
}

impl<S> PriceCache<S>
where
    S: PriceSource + Send + Sync,
{
    pub fn new(source: S, freshness_window: Duration) -> Self {
        Self {
            source,
            entries: TtlCache::new(freshness_window),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn freshness_window(&self) -> Duration {
        self.entries.ttl()
    }

    /// Spot price for `asset_id`, fetched at most once per window
    pub async fn spot(&self, asset_id: &str) -> Option<SpotPrice> {
        let key = asset_id.to_string();
        if let Some(price) = self.entries.get(&key).await {
            tracing::trace!(asset_id, "Price cache hit");
            return Some(price);
        }

        match self.source.fetch_spot(asset_id).await {
            Ok(Some(price)) => {
                self.entries.insert(key, price.clone()).await;
                Some(price)
            }
            Ok(None) => {
                tracing::warn!(asset_id, "Price API returned no data for asset");
                None
            }
            Err(e) => {
                tracing::error!(asset_id, error = %e, "Failed to fetch spot price");
                None
            }
        }
    }
}
