//! API DTOs (Data Transfer Objects)

use crate::application::calculate::CalculateOutput;
use crate::domain::entities::MiningCalculation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for POST /api/mining/calculate
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub hashrate: f64,
    pub revenue: RevenueDto,
    pub costs: CostsDto,
    pub profit: ProfitDto,
    pub roi: f64,
    pub break_even_days: Option<i64>,
    pub environmental_impact: EnvironmentalImpactDto,
    pub calculation_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueDto {
    pub daily_token: f64,
    pub daily_usd: f64,
    pub monthly_usd: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostsDto {
    pub power_daily: f64,
    pub pool_fee_daily: f64,
    pub maintenance_daily: f64,
    pub total_daily: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfitDto {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalImpactDto {
    pub co2_saved_daily_kg: f64,
    pub co2_saved_monthly_kg: f64,
    pub trees_compensated_daily: f64,
    pub trees_compensated_monthly: f64,
}

impl From<CalculateOutput> for CalculationResponse {
    fn from(output: CalculateOutput) -> Self {
        let p = output.profitability;
        Self {
            hashrate: output.params.hashrate,
            revenue: RevenueDto {
                daily_token: p.daily_token,
                daily_usd: p.daily_revenue,
                monthly_usd: p.monthly_revenue,
            },
            costs: CostsDto {
                power_daily: p.power_cost_daily,
                pool_fee_daily: p.pool_fee_daily,
                maintenance_daily: p.maintenance_daily,
                total_daily: p.total_costs_daily,
            },
            profit: ProfitDto {
                daily: p.profit_daily,
                monthly: p.profit_monthly,
                yearly: p.profit_yearly,
            },
            roi: p.roi_percent,
            break_even_days: p.break_even_days,
            environmental_impact: EnvironmentalImpactDto {
                co2_saved_daily_kg: p.co2_saved_daily_kg,
                co2_saved_monthly_kg: p.co2_saved_daily_kg * 30.0,
                trees_compensated_daily: p.trees_compensated_daily,
                trees_compensated_monthly: p.trees_compensated_daily * 30.0,
            },
            calculation_id: output.calculation_id,
        }
    }
}

/// Query for GET /api/mining/history/{address}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// One stored calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRecordDto {
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
    pub break_even_days: Option<i32>,
    pub co2_saved: f64,
    pub trees_compensated: f64,
    pub created_at: DateTime<Utc>,
}

impl From<MiningCalculation> for CalculationRecordDto {
    fn from(c: MiningCalculation) -> Self {
        Self {
            break_even_days: c.break_even(),
            id: c.id,
            wallet_address: c.wallet_address,
            hashrate: c.hashrate,
            power_cost: c.power_cost,
            hardware_cost: c.hardware_cost,
            pool_fee: c.pool_fee,
            maintenance_cost: c.maintenance_cost,
            difficulty: c.difficulty,
            daily_profit: c.daily_profit,
            monthly_profit: c.monthly_profit,
            roi: c.roi,
            co2_saved: c.co2_saved,
            trees_compensated: c.trees_compensated,
            created_at: c.created_at,
        }
    }
}
