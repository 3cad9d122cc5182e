//! Pool Statistics Use Cases

use crate::application::config::StakingConfig;
use crate::domain::entities::{StakingStats, StatsDefaults, StatsUpdate};
use crate::domain::repository::StakingStatsRepository;
use crate::domain::services::display_apr;
use crate::error::StakingResult;
use std::sync::Arc;

/// Statistics as shown, with the display APR in place of the stored one
pub struct PoolStatsUseCase<R>
where
    R: StakingStatsRepository,
{
    repo: Arc<R>,
    config: Arc<StakingConfig>,
}

impl<R> PoolStatsUseCase<R>
where
    R: StakingStatsRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<StakingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> StakingResult<StakingStats> {
        let mut stats = self.repo.get_or_create(&StatsDefaults::SHOWCASE).await?;
        stats.current_apr = display_apr(&stats, self.config.apr_cap);
        Ok(stats)
    }
}

pub struct UpdateStatsUseCase<R>
where
    R: StakingStatsRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateStatsUseCase<R>
where
    R: StakingStatsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, update: StatsUpdate) -> StakingResult<StakingStats> {
        let stats = self.repo.update(&update, &StatsDefaults::EMPTY).await?;
        tracing::info!(
            total_staked = stats.total_staked,
            total_rewards = stats.total_rewards,
            active_stakers = stats.active_stakers,
            "Pool statistics updated"
        );
        Ok(stats)
    }
}
