//! Domain Value Objects
//!
//! Immutable value types for the mining domain.

use crate::error::{MiningError, MiningResult};

/// Hardware and operating parameters submitted for a calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningParameters {
    /// TH/s
    pub hashrate: f64,
    /// USD per kWh
    pub power_cost: f64,
    /// USD
    pub hardware_cost: f64,
    /// Percent of revenue
    pub pool_fee: f64,
    /// USD per month
    pub maintenance_cost: f64,
    /// Multiplier on the network hashrate
    pub difficulty: f64,
}

impl MiningParameters {
    pub const DEFAULT_DIFFICULTY: f64 = 1.0;

    pub fn new(
        hashrate: f64,
        power_cost: f64,
        hardware_cost: f64,
        pool_fee: f64,
        maintenance_cost: f64,
        difficulty: Option<f64>,
    ) -> MiningResult<Self> {
        let difficulty = difficulty.unwrap_or(Self::DEFAULT_DIFFICULTY);
        if !difficulty.is_finite() || difficulty <= 0.0 {
            return Err(MiningError::InvalidParameter(
                "difficulty must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            hashrate,
            power_cost,
            hardware_cost,
            pool_fee,
            maintenance_cost,
            difficulty,
        })
    }
}

/// Fixed assumptions about the network and hardware
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkModel {
    /// Tokens minted per block
    pub block_reward: f64,
    pub blocks_per_day: f64,
    /// TH/s at difficulty 1.0
    pub network_hashrate: f64,
    /// USD
    pub token_price: f64,
    /// Power draw per TH/s
    pub watts_per_th: f64,
    /// kg CO2 per kWh of displaced grid power
    pub co2_kg_per_kwh: f64,
    /// kg CO2 a tree absorbs per year
    pub tree_absorption_kg_per_year: f64,
}

impl Default for NetworkModel {
    fn default() -> Self {
        Self {
            block_reward: 6.25,
            blocks_per_day: 144.0,
            network_hashrate: 180_000_000.0,
            token_price: 30_000.0,
            watts_per_th: 100.0,
            co2_kg_per_kwh: 0.5,
            tree_absorption_kg_per_year: 21_000.0,
        }
    }
}
