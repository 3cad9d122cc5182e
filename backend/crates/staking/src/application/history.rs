//! Pool History Use Case

use crate::application::config::StakingConfig;
use crate::domain::entities::HistoryPoint;
use crate::domain::services::pool_history;
use std::sync::Arc;

pub struct PoolHistoryUseCase {
    config: Arc<StakingConfig>,
}

impl PoolHistoryUseCase {
    pub fn new(config: Arc<StakingConfig>) -> Self {
        Self { config }
    }

    /// Series ending today (UTC); returns the clamped length with it
    pub fn execute(&self, days: Option<i64>) -> (u32, Vec<HistoryPoint>) {
        let days = self.config.history_days(days);
        let today = chrono::Utc::now().date_naive();
        (days, pool_history(today, days))
    }
}
