//! API DTOs (Data Transfer Objects)

use crate::application::history::HistoryInput;
use crate::domain::entities::{Transaction, TransactionPage, TransactionStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query for GET /api/transactions/history/{address}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
    #[serde(default, rename = "type")]
    pub transaction_type: Option<String>,
}

impl HistoryQuery {
    pub fn into_input(self, address: String) -> HistoryInput {
        HistoryInput {
            address,
            page: self.page,
            per_page: self.per_page,
            transaction_type: self.transaction_type,
        }
    }
}

/// Response data for POST /api/transactions/log
#[derive(Debug, Clone, Serialize)]
pub struct LoggedTransactionDto {
    pub id: i64,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Transaction> for LoggedTransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            hash: tx.hash,
            timestamp: tx.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionDto {
    pub id: i64,
    pub hash: String,
    pub from_address: String,
    pub to_address: String,
    pub value: String,
    pub gas_price: String,
    pub gas_used: String,
    pub block_number: i64,
    pub timestamp: DateTime<Utc>,
    pub transaction_type: String,
    pub status: String,
}

impl From<Transaction> for TransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            hash: tx.hash,
            from_address: tx.from_address,
            to_address: tx.to_address,
            value: tx.value,
            gas_price: tx.gas_price,
            gas_used: tx.gas_used,
            block_number: tx.block_number,
            timestamp: tx.timestamp,
            transaction_type: tx.transaction_type,
            status: tx.status,
        }
    }
}

/// Response data for GET /api/transactions/history/{address}
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub transactions: Vec<TransactionDto>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total_transactions: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<TransactionPage> for HistoryResponse {
    fn from(page: TransactionPage) -> Self {
        Self {
            total_pages: page.total_pages(),
            current_page: page.page,
            total_transactions: page.total,
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            transactions: page
                .transactions
                .into_iter()
                .map(TransactionDto::from)
                .collect(),
        }
    }
}

/// Response data for GET /api/transactions/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_transactions: i64,
    pub transactions_24h: i64,
    pub total_volume: String,
    pub by_type: ByTypeDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ByTypeDto {
    pub staking: i64,
    pub swap: i64,
    pub investment: i64,
}

impl From<TransactionStats> for StatsResponse {
    fn from(stats: TransactionStats) -> Self {
        Self {
            total_transactions: stats.total,
            transactions_24h: stats.recent,
            total_volume: stats.total_volume,
            by_type: ByTypeDto {
                staking: stats.staking,
                swap: stats.swap,
                investment: stats.investment,
            },
        }
    }
}
