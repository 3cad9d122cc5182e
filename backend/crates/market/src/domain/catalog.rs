//! Static exchange tables
//!
//! Illustrative figures only. Addresses are BSC testnet contracts.

use crate::domain::entities::SpotPrice;
use serde::Serialize;

pub const WBNB_ADDRESS: &str = "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd";
pub const USDT_ADDRESS: &str = "0x7ef95a0FEE0Dd31b22626fA2e10Ee6A223F8a684";
pub const GREENHASH_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub const HOUSE_TOKEN_SYMBOL: &str = "GREENHASH";

/// Swap fee as a percentage of the output amount
pub const SWAP_FEE_PERCENT: f64 = 0.1;
/// Slippage tolerated in `minimumReceived`, percent
pub const MAX_SLIPPAGE_PERCENT: f64 = 1.0;
pub const PRICE_IMPACT_PERCENT: f64 = 0.1;
pub const ESTIMATED_GAS: u64 = 150_000;

/// Units of `to` received per unit of `from`
const EXCHANGE_RATES: &[(&str, &str, f64)] = &[
    ("BNB", "USDT", 300.0),
    ("USDT", "BNB", 1.0 / 300.0),
    ("BNB", "GREENHASH", 6000.0),
    ("GREENHASH", "BNB", 1.0 / 6000.0),
    ("USDT", "GREENHASH", 20.0),
    ("GREENHASH", "USDT", 1.0 / 20.0),
];

/// Rate for a directed pair of upper-case symbols
pub fn exchange_rate(from: &str, to: &str) -> Option<f64> {
    EXCHANGE_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub decimals: u8,
    pub chain_id: u64,
    #[serde(rename = "logoURI")]
    pub logo_uri: &'static str,
}

pub const TOKENS: &[TokenInfo] = &[
    TokenInfo {
        symbol: "BNB",
        name: "BNB",
        address: WBNB_ADDRESS,
        decimals: 18,
        chain_id: 97,
        logo_uri: "https://tokens.pancakeswap.finance/images/0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c.png",
    },
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        address: USDT_ADDRESS,
        decimals: 18,
        chain_id: 97,
        logo_uri: "https://tokens.pancakeswap.finance/images/0x55d398326f99059fF775485246999027B3197955.png",
    },
    TokenInfo {
        symbol: "GREENHASH",
        name: "Green Hash Token",
        address: GREENHASH_TOKEN_ADDRESS,
        decimals: 18,
        chain_id: 97,
        logo_uri: "/greenhash-logo.png",
    },
];

/// Contract address for a symbol, empty when unknown
pub fn token_address(symbol: &str) -> &'static str {
    TOKENS
        .iter()
        .find(|t| t.symbol == symbol)
        .map(|t| t.address)
        .unwrap_or("")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidity {
    pub reserve0: f64,
    pub reserve1: f64,
    pub total_liquidity: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    #[serde(rename = "fees24h")]
    pub fees_24h: f64,
}

const LIQUIDITY: &[(&str, Liquidity)] = &[
    (
        "BNB-USDT",
        Liquidity {
            reserve0: 1_000.0,
            reserve1: 300_000.0,
            total_liquidity: 500_000.0,
            volume_24h: 150_000.0,
            fees_24h: 150.0,
        },
    ),
    (
        "BNB-GREENHASH",
        Liquidity {
            reserve0: 100.0,
            reserve1: 600_000.0,
            total_liquidity: 100_000.0,
            volume_24h: 25_000.0,
            fees_24h: 25.0,
        },
    ),
];

pub fn liquidity(pair: &str) -> Option<&'static Liquidity> {
    LIQUIDITY
        .iter()
        .find(|(name, _)| *name == pair)
        .map(|(_, info)| info)
}

/// Simulated house-token quote stamped with `now` (unix seconds)
pub fn house_token_quote(now: i64) -> SpotPrice {
    SpotPrice {
        usd: 0.05,
        eur: 0.045,
        change_24h: 2.5,
        market_cap: 5_000_000.0,
        volume_24h: 100_000.0,
        last_updated: now,
    }
}
