//! Domain Services
//!
//! Swap quote arithmetic over the static rate table.

use crate::domain::catalog::{MAX_SLIPPAGE_PERCENT, SWAP_FEE_PERCENT, exchange_rate};
use crate::domain::entities::SwapQuote;
use crate::error::{MarketError, MarketResult};

/// Quote `amount` of `from` into `to`
///
/// Symbols are compared upper-cased. `amount` must be finite and positive.
pub fn quote_swap(from: &str, to: &str, amount: f64) -> MarketResult<SwapQuote> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(MarketError::InvalidAmount);
    }

    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();
    let rate = exchange_rate(&from, &to)
        .ok_or_else(|| MarketError::UnsupportedPair(format!("{from}-{to}")))?;

    let output = amount * rate;
    let fee = output * SWAP_FEE_PERCENT / 100.0;
    let amount_out = output - fee;

    Ok(SwapQuote {
        from_symbol: from,
        to_symbol: to,
        amount_in: amount,
        rate,
        output,
        fee,
        amount_out,
        minimum_received: amount_out * (1.0 - MAX_SLIPPAGE_PERCENT / 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bnb_to_usdt() {
        let quote = quote_swap("bnb", "usdt", 2.0).unwrap();
        assert_eq!(quote.from_symbol, "BNB");
        assert_eq!(quote.to_symbol, "USDT");
        assert_eq!(quote.rate, 300.0);
        assert!((quote.output - 600.0).abs() < 1e-9);
        assert!((quote.fee - 0.6).abs() < 1e-9);
        assert!((quote.amount_out - 599.4).abs() < 1e-9);
        assert!((quote.minimum_received - 593.406).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_pair_uses_inverse_rate() {
        let quote = quote_swap("GREENHASH", "USDT", 100.0).unwrap();
        assert!((quote.output - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsupported_pair() {
        let err = quote_swap("ETH", "XYZ", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported pair: ETH-XYZ");
    }

    #[test]
    fn test_non_positive_amount() {
        assert!(matches!(
            quote_swap("BNB", "USDT", 0.0),
            Err(MarketError::InvalidAmount)
        ));
        assert!(matches!(
            quote_swap("BNB", "USDT", -1.0),
            Err(MarketError::InvalidAmount)
        ));
        assert!(matches!(
            quote_swap("BNB", "USDT", f64::NAN),
            Err(MarketError::InvalidAmount)
        ));
    }
}
