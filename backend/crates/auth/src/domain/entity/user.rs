//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::WalletAddress;

/// A wallet that has logged in at least once
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub wallet_address: WalletAddress,
    pub created_at: DateTime<Utc>,
}
