//! Calculation History Use Case

use crate::application::config::MiningConfig;
use crate::domain::entities::MiningCalculation;
use crate::domain::repository::CalculationRepository;
use crate::error::MiningResult;
use std::sync::Arc;

pub struct CalculationHistoryUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
    config: Arc<MiningConfig>,
}

impl<R> CalculationHistoryUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<MiningConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        wallet_address: &str,
        limit: Option<i64>,
    ) -> MiningResult<Vec<MiningCalculation>> {
        let limit = self.config.history_limit(limit);
        self.repo.list_by_wallet(wallet_address, limit).await
    }
}
