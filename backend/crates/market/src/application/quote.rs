//! Swap Quote Use Case

use crate::domain::entities::SwapQuote;
use crate::domain::services::quote_swap;
use crate::error::{MarketError, MarketResult};

/// Raw query values as received
#[derive(Debug, Clone, Default)]
pub struct QuoteInput {
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub amount: Option<String>,
}

pub struct SwapQuoteUseCase;

impl SwapQuoteUseCase {
    pub fn execute(input: QuoteInput) -> MarketResult<SwapQuote> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let (Some(from), Some(to), Some(amount)) = (
            non_empty(input.from_token),
            non_empty(input.to_token),
            non_empty(input.amount),
        ) else {
            return Err(MarketError::MissingQuoteParams);
        };

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| MarketError::InvalidAmount)?;

        let quote = quote_swap(&from, &to, amount)?;
        tracing::debug!(
            from = %quote.from_symbol,
            to = %quote.to_symbol,
            amount_in = quote.amount_in,
            amount_out = quote.amount_out,
            "Swap quote computed"
        );
        Ok(quote)
    }
}
