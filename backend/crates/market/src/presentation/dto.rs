//! API DTOs (Data Transfer Objects)

use crate::application::quote::QuoteInput;
use crate::domain::catalog::{ESTIMATED_GAS, PRICE_IMPACT_PERCENT, SWAP_FEE_PERCENT, token_address};
use crate::domain::entities::SwapQuote;
use serde::{Deserialize, Serialize};

/// Query for GET /api/prices/history/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub days: Option<u32>,
}

/// Query for GET /api/dex/quote
///
/// Kept as raw strings so a missing or non-numeric amount gets its own message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    #[serde(default)]
    pub from_token: Option<String>,
    #[serde(default)]
    pub to_token: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl From<QuoteQuery> for QuoteInput {
    fn from(q: QuoteQuery) -> Self {
        QuoteInput {
            from_token: q.from_token,
            to_token: q.to_token,
            amount: q.amount,
        }
    }
}

/// Response for GET /api/dex/quote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub from_token: QuoteSide,
    pub to_token: QuoteSide,
    pub exchange_rate: f64,
    pub fee: QuoteFee,
    pub minimum_received: f64,
    pub price_impact: f64,
    pub route: [String; 2],
    pub estimated_gas: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteSide {
    pub symbol: String,
    pub address: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteFee {
    pub amount: f64,
    pub percentage: f64,
    pub currency: String,
}

impl From<SwapQuote> for QuoteResponse {
    fn from(q: SwapQuote) -> Self {
        Self {
            from_token: QuoteSide {
                address: token_address(&q.from_symbol),
                symbol: q.from_symbol.clone(),
                amount: q.amount_in,
            },
            to_token: QuoteSide {
                address: token_address(&q.to_symbol),
                symbol: q.to_symbol.clone(),
                amount: q.amount_out,
            },
            exchange_rate: q.rate,
            fee: QuoteFee {
                amount: q.fee,
                percentage: SWAP_FEE_PERCENT,
                currency: q.to_symbol.clone(),
            },
            minimum_received: q.minimum_received,
            price_impact: PRICE_IMPACT_PERCENT,
            route: [q.from_symbol, q.to_symbol],
            estimated_gas: ESTIMATED_GAS,
        }
    }
}
