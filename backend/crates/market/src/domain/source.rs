//! Price Source Port
//!
//! Interface to a third-party price API. The HTTP implementation lives in
//! the infrastructure layer; tests substitute a stub.

use crate::domain::entities::{PriceHistory, SpotPrice};
use crate::error::MarketResult;

#[trait_variant::make(PriceSource: Send)]
pub trait LocalPriceSource {
    /// Current quote, `Ok(None)` when the API knows nothing about the asset
    async fn fetch_spot(&self, asset_id: &str) -> MarketResult<Option<SpotPrice>>;

    /// Daily series over the last `days` days
    async fn fetch_history(&self, asset_id: &str, days: u32) -> MarketResult<PriceHistory>;
}
