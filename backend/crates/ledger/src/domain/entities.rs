//! Domain Entities

use chrono::{DateTime, Utc};

/// Status given to a transaction logged without one
pub const DEFAULT_STATUS: &str = "pending";

/// Transaction types broken out in the statistics
pub const TRACKED_TYPES: [&str; 3] = ["staking", "swap", "investment"];

/// A logged on-chain transaction
///
/// Value and gas figures are kept as decimal strings exactly as reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
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

impl Transaction {
    /// True when `address` sent or received this transaction
    pub fn involves(&self, address: &str) -> bool {
        self.from_address == address || self.to_address == address
    }
}

/// Transaction to be inserted
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub hash: String,
    pub from_address: String,
    pub to_address: String,
    pub value: String,
    pub gas_price: String,
    pub gas_used: String,
    pub block_number: i64,
    pub transaction_type: String,
    pub status: String,
}

/// One page of an address history
#[derive(Debug, Clone)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

impl TransactionPage {
    pub fn total_pages(&self) -> i64 {
        if self.per_page <= 0 {
            return 0;
        }
        (self.total + self.per_page - 1) / self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Aggregate figures over every logged transaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStats {
    pub total: i64,
    pub recent: i64,
    /// Sum of integer-valued `value` strings, as a decimal string
    pub total_volume: String,
    pub staking: i64,
    pub swap: i64,
    pub investment: i64,
}

/// Whether `value` is a plain unsigned integer string and so counts toward volume
pub fn is_integer_amount(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
