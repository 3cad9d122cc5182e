//! Domain Services
//!
//! Pure profitability math. No I/O.

use crate::domain::value_objects::{MiningParameters, NetworkModel};

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Derived figures for one set of parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profitability {
    pub daily_token: f64,
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub power_cost_daily: f64,
    pub pool_fee_daily: f64,
    pub maintenance_daily: f64,
    pub total_costs_daily: f64,
    pub profit_daily: f64,
    pub profit_monthly: f64,
    pub profit_yearly: f64,
    pub roi_percent: f64,
    /// None when daily profit is not positive
    pub break_even_days: Option<i64>,
    pub co2_saved_daily_kg: f64,
    pub trees_compensated_daily: f64,
}

/// Compute profitability for `params` under `model`
pub fn calculate_profitability(params: &MiningParameters, model: &NetworkModel) -> Profitability {
    let power_kw = params.hashrate * model.watts_per_th / 1000.0;
    let power_cost_daily = power_kw * params.power_cost * 24.0;

    let network_hashrate = model.network_hashrate * params.difficulty;
    let share = params.hashrate / network_hashrate;

    let daily_token = model.blocks_per_day * share * model.block_reward;
    let daily_revenue = daily_token * model.token_price;

    let pool_fee_daily = daily_revenue * (params.pool_fee / 100.0);
    let maintenance_daily = params.maintenance_cost / DAYS_PER_MONTH;
    let total_costs_daily = power_cost_daily + pool_fee_daily + maintenance_daily;

    let profit_daily = daily_revenue - total_costs_daily;
    let profit_monthly = profit_daily * DAYS_PER_MONTH;

    let roi_percent = if params.hardware_cost > 0.0 {
        (profit_monthly * 12.0 / params.hardware_cost) * 100.0
    } else {
        0.0
    };

    let break_even_days = (profit_daily > 0.0)
        .then(|| params.hardware_cost / profit_daily)
        .filter(|days| days.is_finite())
        .map(|days| days.trunc() as i64);

    let co2_saved_daily_kg = power_kw * 24.0 * model.co2_kg_per_kwh;
    let trees_compensated_daily =
        co2_saved_daily_kg * DAYS_PER_YEAR / model.tree_absorption_kg_per_year;

    Profitability {
        daily_token,
        daily_revenue,
        monthly_revenue: daily_revenue * DAYS_PER_MONTH,
        power_cost_daily,
        pool_fee_daily,
        maintenance_daily,
        total_costs_daily,
        profit_daily,
        profit_monthly,
        profit_yearly: profit_daily * DAYS_PER_YEAR,
        roi_percent,
        break_even_days,
        co2_saved_daily_kg,
        trees_compensated_daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn reference_params() -> MiningParameters {
        MiningParameters::new(100.0, 0.12, 10_000.0, 2.0, 500.0, None).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let p = calculate_profitability(&reference_params(), &NetworkModel::default());

        assert!(close(p.power_cost_daily, 28.8));
        assert!(close(p.daily_token, 0.0005));
        assert!(close(p.daily_revenue, 15.0));
        assert!(close(p.monthly_revenue, 450.0));
        assert!(close(p.pool_fee_daily, 0.3));
        assert!(close(p.maintenance_daily, 500.0 / 30.0));
        assert!(close(p.profit_daily, 15.0 - 28.8 - 0.3 - 500.0 / 30.0));
        assert!(close(p.profit_monthly, -923.0));
        assert!(close(p.roi_percent, -110.76));
        assert_eq!(p.break_even_days, None);
        assert!(close(p.co2_saved_daily_kg, 120.0));
        assert!(close(p.trees_compensated_daily, 120.0 * 365.0 / 21_000.0));
    }

    #[test]
    fn test_profitable_scenario_breaks_even() {
        // cheap power, high hashrate
        let params = MiningParameters::new(10_000.0, 0.0, 3_100.0, 0.0, 0.0, None).unwrap();
        let p = calculate_profitability(&params, &NetworkModel::default());

        assert!(close(p.daily_revenue, 1_500.0));
        assert!(close(p.profit_daily, 1_500.0));
        assert_eq!(p.break_even_days, Some(2));
    }

    #[test]
    fn test_zero_hardware_cost_has_zero_roi() {
        let params = MiningParameters::new(100.0, 0.12, 0.0, 2.0, 500.0, None).unwrap();
        let p = calculate_profitability(&params, &NetworkModel::default());
        assert_eq!(p.roi_percent, 0.0);
    }

    #[test]
    fn test_difficulty_scales_revenue() {
        let base = calculate_profitability(&reference_params(), &NetworkModel::default());
        let params = MiningParameters::new(100.0, 0.12, 10_000.0, 2.0, 500.0, Some(2.0)).unwrap();
        let harder = calculate_profitability(&params, &NetworkModel::default());

        assert!(close(harder.daily_revenue, base.daily_revenue / 2.0));
        // power and CO2 do not depend on difficulty
        assert!(close(harder.power_cost_daily, base.power_cost_daily));
        assert!(close(harder.co2_saved_daily_kg, base.co2_saved_daily_kg));
    }

    #[test]
    fn test_non_positive_difficulty_rejected() {
        assert!(MiningParameters::new(1.0, 1.0, 1.0, 1.0, 1.0, Some(0.0)).is_err());
        assert!(MiningParameters::new(1.0, 1.0, 1.0, 1.0, 1.0, Some(-1.0)).is_err());
    }
}
