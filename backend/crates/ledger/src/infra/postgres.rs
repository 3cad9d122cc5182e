//! PostgreSQL Repository Implementations

use crate::domain::entities::{NewTransaction, Transaction, TransactionPage, TransactionStats};
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::HistoryFilter;
use crate::error::{LedgerError, LedgerResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionRepository for PgTransactionRepository {
    async fn exists_by_hash(&self, hash: &str) -> LedgerResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM transactions WHERE hash = $1)")
                .bind(hash)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn insert(&self, transaction: &NewTransaction) -> LedgerResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions (
                hash, from_address, to_address, value, gas_price, gas_used,
                block_number, transaction_type, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, hash, from_address, to_address, value, gas_price, gas_used,
                      block_number, created_at, transaction_type, status
            "#,
        )
        .bind(&transaction.hash)
        .bind(&transaction.from_address)
        .bind(&transaction.to_address)
        .bind(&transaction.value)
        .bind(&transaction.gas_price)
        .bind(&transaction.gas_used)
        .bind(transaction.block_number)
        .bind(&transaction.transaction_type)
        .bind(&transaction.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                LedgerError::AlreadyRecorded
            }
            other => LedgerError::Database(other),
        })?;

        Ok(row.into_transaction())
    }

    async fn list_by_address(&self, filter: &HistoryFilter) -> LedgerResult<TransactionPage> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE (from_address = $1 OR to_address = $1)
              AND ($2::TEXT IS NULL OR transaction_type = $2)
            "#,
        )
        .bind(&filter.address)
        .bind(filter.transaction_type.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, hash, from_address, to_address, value, gas_price, gas_used,
                   block_number, created_at, transaction_type, status
            FROM transactions
            WHERE (from_address = $1 OR to_address = $1)
              AND ($2::TEXT IS NULL OR transaction_type = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filter.address)
        .bind(filter.transaction_type.as_deref())
        .bind(filter.pagination.per_page)
        .bind(filter.pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(TransactionPage {
            transactions: rows
                .into_iter()
                .map(TransactionRow::into_transaction)
                .collect(),
            total,
            page: filter.pagination.page,
            per_page: filter.pagination.per_page,
        })
    }

    async fn stats(&self, since: DateTime<Utc>) -> LedgerResult<TransactionStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE created_at >= $1) AS recent,
                COALESCE(
                    SUM(CASE WHEN value ~ '^[0-9]+$' THEN value::NUMERIC END), 0
                )::TEXT AS total_volume,
                COUNT(*) FILTER (WHERE transaction_type = 'staking') AS staking,
                COUNT(*) FILTER (WHERE transaction_type = 'swap') AS swap,
                COUNT(*) FILTER (WHERE transaction_type = 'investment') AS investment
            FROM transactions
            "#,
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(TransactionStats {
            total: row.total,
            recent: row.recent,
            total_volume: row.total_volume,
            staking: row.staking,
            swap: row.swap,
            investment: row.investment,
        })
    }

    async fn update_status(&self, hash: &str, status: &str) -> LedgerResult<bool> {
        let result = sqlx::query("UPDATE transactions SET status = $2 WHERE hash = $1")
            .bind(hash)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    hash: String,
    from_address: String,
    to_address: String,
    value: String,
    gas_price: String,
    gas_used: String,
    block_number: i64,
    created_at: DateTime<Utc>,
    transaction_type: String,
    status: String,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: self.id,
            hash: self.hash,
            from_address: self.from_address,
            to_address: self.to_address,
            value: self.value,
            gas_price: self.gas_price,
            gas_used: self.gas_used,
            block_number: self.block_number,
            timestamp: self.created_at,
            transaction_type: self.transaction_type,
            status: self.status,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total: i64,
    recent: i64,
    total_volume: String,
    staking: i64,
    swap: i64,
    investment: i64,
}
