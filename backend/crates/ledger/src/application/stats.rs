//! Transaction Statistics Use Case

use crate::application::config::LedgerConfig;
use crate::domain::entities::TransactionStats;
use crate::domain::repository::TransactionRepository;
use crate::error::LedgerResult;
use std::sync::Arc;

pub struct TransactionStatsUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
    config: Arc<LedgerConfig>,
}

impl<R> TransactionStatsUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<LedgerConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> LedgerResult<TransactionStats> {
        let since = chrono::Utc::now() - self.config.recent_window;
        self.repo.stats(since).await
    }
}
