//! Calculate Profitability Use Case

use crate::application::config::MiningConfig;
use crate::domain::entities::NewMiningCalculation;
use crate::domain::repository::CalculationRepository;
use crate::domain::services::{Profitability, calculate_profitability};
use crate::domain::value_objects::MiningParameters;
use crate::error::MiningResult;
use std::sync::Arc;

/// Input DTO for a calculation
#[derive(Debug, Clone)]
pub struct CalculateInput {
    pub params: MiningParameters,
    /// Empty when the caller did not supply one
    pub wallet_address: String,
}

/// Output DTO for a calculation
#[derive(Debug, Clone)]
pub struct CalculateOutput {
    pub params: MiningParameters,
    pub profitability: Profitability,
    pub calculation_id: i64,
}

/// Calculate Profitability Use Case
pub struct CalculateProfitabilityUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
    config: Arc<MiningConfig>,
}

impl<R> CalculateProfitabilityUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<MiningConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CalculateInput) -> MiningResult<CalculateOutput> {
        let profitability = calculate_profitability(&input.params, &self.config.network);

        let record = NewMiningCalculation::new(input.wallet_address, input.params, &profitability);
        let stored = self.repo.insert(&record).await?;

        tracing::info!(
            calculation_id = stored.id,
            hashrate = input.params.hashrate,
            daily_profit = profitability.profit_daily,
            "Mining calculation stored"
        );

        Ok(CalculateOutput {
            params: input.params,
            profitability,
            calculation_id: stored.id,
        })
    }
}
