//! Infrastructure Layer - External API adapters

pub mod coingecko;
