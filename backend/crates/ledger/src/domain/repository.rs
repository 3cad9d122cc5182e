//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{NewTransaction, Transaction, TransactionPage, TransactionStats};
use crate::domain::value_objects::HistoryFilter;
use crate::error::LedgerResult;
use chrono::{DateTime, Utc};

/// Transaction repository trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    async fn exists_by_hash(&self, hash: &str) -> LedgerResult<bool>;

    /// Store a transaction
    ///
    /// Fails with `LedgerError::AlreadyRecorded` when the hash is taken.
    async fn insert(&self, transaction: &NewTransaction) -> LedgerResult<Transaction>;

    /// Page of records involving the filter address, newest first
    async fn list_by_address(&self, filter: &HistoryFilter) -> LedgerResult<TransactionPage>;

    /// Aggregates; `recent` counts records at or after `since`
    async fn stats(&self, since: DateTime<Utc>) -> LedgerResult<TransactionStats>;

    /// Set the status of a record, returning false when the hash is unknown
    async fn update_status(&self, hash: &str, status: &str) -> LedgerResult<bool>;
}
