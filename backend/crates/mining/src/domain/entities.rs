//! Domain Entities
//!
//! Core business entities for the mining domain.

use chrono::{DateTime, Utc};

use crate::domain::services::Profitability;
use crate::domain::value_objects::MiningParameters;

/// Stored break-even value when daily profit never turns positive
pub const BREAK_EVEN_UNREACHABLE: i32 = 9999;

/// A persisted calculation. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningCalculation {
    pub id: i64,
    pub wallet_address: String,
    pub hashrate: f64,
    pub power_cost: f64,
    pub hardware_cost: f64,
    pub pool_fee: f64,
    pub maintenance_cost: f64,
    pub difficulty: f64,
    pub daily_profit: f64,
    pub monthly_profit: f64,
    pub roi: f64,
    /// `BREAK_EVEN_UNREACHABLE` when unreachable
    pub break_even_days: i32,
    /// kg per day
    pub co2_saved: f64,
    /// trees per day
    pub trees_compensated: f64,
    pub created_at: DateTime<Utc>,
}

impl MiningCalculation {
    /// Break-even in days, None when unreachable
    pub fn break_even(&self) -> Option<i32> {
        (self.break_even_days != BREAK_EVEN_UNREACHABLE).then_some(self.break_even_days)
    }
}

/// A calculation about to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewMiningCalculation {
    pub wallet_address: String,
    pub params: MiningParameters,
    pub daily_profit: f64,
    pub monthly_profit: f64,
    pub roi: f64,
    pub break_even_days: i32,
    pub co2_saved: f64,
    pub trees_compensated: f64,
}

impl NewMiningCalculation {
    pub fn new(wallet_address: String, params: MiningParameters, result: &Profitability) -> Self {
        let break_even_days = result
            .break_even_days
            .and_then(|days| i32::try_from(days).ok())
            .filter(|days| *days < BREAK_EVEN_UNREACHABLE)
            .unwrap_or(BREAK_EVEN_UNREACHABLE);

        Self {
            wallet_address,
            params,
            daily_profit: result.profit_daily,
            monthly_profit: result.profit_monthly,
            roi: result.roi_percent,
            break_even_days,
            co2_saved: result.co2_saved_daily_kg,
            trees_compensated: result.trees_compensated_daily,
        }
    }
}
