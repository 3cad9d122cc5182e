//! Update Transaction Status Use Case

use crate::domain::repository::TransactionRepository;
use crate::error::{LedgerError, LedgerResult};
use std::sync::Arc;

pub struct UpdateStatusUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateStatusUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, hash: &str, status: &str) -> LedgerResult<()> {
        if !self.repo.update_status(hash, status).await? {
            return Err(LedgerError::NotFound);
        }
        tracing::info!(hash, status, "Transaction status updated");
        Ok(())
    }
}
