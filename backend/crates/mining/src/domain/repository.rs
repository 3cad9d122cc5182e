//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{MiningCalculation, NewMiningCalculation};
use crate::error::MiningResult;

/// Mining calculation repository trait
#[trait_variant::make(CalculationRepository: Send)]
pub trait LocalCalculationRepository {
    /// Store a calculation and return the persisted record
    async fn insert(&self, calculation: &NewMiningCalculation) -> MiningResult<MiningCalculation>;

    /// Most recent calculations for a wallet, newest first
    async fn list_by_wallet(
        &self,
        wallet_address: &str,
        limit: i64,
    ) -> MiningResult<Vec<MiningCalculation>>;
}
