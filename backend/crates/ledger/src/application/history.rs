//! Transaction History Use Case

use crate::application::config::LedgerConfig;
use crate::domain::entities::TransactionPage;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::HistoryFilter;
use crate::error::LedgerResult;
use std::sync::Arc;

/// Raw history query
#[derive(Debug, Clone, Default)]
pub struct HistoryInput {
    pub address: String,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub transaction_type: Option<String>,
}

pub struct TransactionHistoryUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
    config: Arc<LedgerConfig>,
}

impl<R> TransactionHistoryUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<LedgerConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: HistoryInput) -> LedgerResult<TransactionPage> {
        let filter = HistoryFilter {
            address: input.address,
            transaction_type: input.transaction_type.filter(|t| !t.is_empty()),
            pagination: self.config.pagination(input.page, input.per_page),
        };
        self.repo.list_by_address(&filter).await
    }
}
