//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{StakingStats, StatsDefaults, StatsUpdate};
use crate::error::StakingResult;

/// Singleton statistics row
#[trait_variant::make(StakingStatsRepository: Send)]
pub trait LocalStakingStatsRepository {
    /// The row, created from `defaults` when absent
    async fn get_or_create(&self, defaults: &StatsDefaults) -> StakingResult<StakingStats>;

    /// Apply `update` to the row (created from `defaults` when absent)
    async fn update(
        &self,
        update: &StatsUpdate,
        defaults: &StatsDefaults,
    ) -> StakingResult<StakingStats>;
}
