//! Log Transaction Use Case

use crate::domain::entities::{NewTransaction, Transaction};
use crate::domain::repository::TransactionRepository;
use crate::error::{LedgerError, LedgerResult};
use std::sync::Arc;

pub struct LogTransactionUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> LogTransactionUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The unique index still guards against a concurrent insert of the same hash
    pub async fn execute(&self, transaction: NewTransaction) -> LedgerResult<Transaction> {
        if self.repo.exists_by_hash(&transaction.hash).await? {
            return Err(LedgerError::AlreadyRecorded);
        }

        let stored = self.repo.insert(&transaction).await?;

        tracing::info!(
            id = stored.id,
            hash = %stored.hash,
            transaction_type = %stored.transaction_type,
            "Transaction logged"
        );
        Ok(stored)
    }
}
