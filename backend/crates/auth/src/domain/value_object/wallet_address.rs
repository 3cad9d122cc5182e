//! Wallet Address Value Object
//!
//! An EVM account address: `0x` followed by 40 hex digits, stored lowercased.
//! The checksum casing of the input is not verified.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const ADDRESS_HEX_LENGTH: usize = 40;

/// Wallet address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Create a new wallet address with validation
    pub fn new(address: impl AsRef<str>) -> AppResult<Self> {
        let address = address.as_ref().trim().to_lowercase();

        let valid = address
            .strip_prefix("0x")
            .is_some_and(|hex| {
                hex.len() == ADDRESS_HEX_LENGTH && hex.bytes().all(|b| b.is_ascii_hexdigit())
            });
        if !valid {
            return Err(AppError::bad_request("Invalid wallet address"));
        }

        Ok(Self(address))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for WalletAddress {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        WalletAddress::new(s)
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
