//! PostgreSQL Repository Implementations

use crate::domain::entities::{MiningCalculation, NewMiningCalculation};
use crate::domain::repository::CalculationRepository;
use crate::error::MiningResult;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgCalculationRepository {
    pool: PgPool,
}

impl PgCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CalculationRepository for PgCalculationRepository {
    async fn insert(&self, calculation: &NewMiningCalculation) -> MiningResult<MiningCalculation> {
        let params = &calculation.params;

        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            INSERT INTO mining_calculations (
                wallet_address, hashrate, power_cost, hardware_cost, pool_fee,
                maintenance_cost, difficulty, daily_profit, monthly_profit, roi,
                break_even_days, co2_saved, trees_compensated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, wallet_address, hashrate, power_cost, hardware_cost, pool_fee,
                      maintenance_cost, difficulty, daily_profit, monthly_profit, roi,
                      break_even_days, co2_saved, trees_compensated, created_at
            "#,
        )
        .bind(&calculation.wallet_address)
        .bind(params.hashrate)
        .bind(params.power_cost)
        .bind(params.hardware_cost)
        .bind(params.pool_fee)
        .bind(params.maintenance_cost)
        .bind(params.difficulty)
        .bind(calculation.daily_profit)
        .bind(calculation.monthly_profit)
        .bind(calculation.roi)
        .bind(calculation.break_even_days)
        .bind(calculation.co2_saved)
        .bind(calculation.trees_compensated)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_calculation())
    }

    async fn list_by_wallet(
        &self,
        wallet_address: &str,
        limit: i64,
    ) -> MiningResult<Vec<MiningCalculation>> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT id, wallet_address, hashrate, power_cost, hardware_cost, pool_fee,
                   maintenance_cost, difficulty, daily_profit, monthly_profit, roi,
                   break_even_days, co2_saved, trees_compensated, created_at
            FROM mining_calculations
            WHERE wallet_address = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(wallet_address)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CalculationRow::into_calculation).collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct CalculationRow {
    id: i64,
    wallet_address: String,
    hashrate: f64,
    power_cost: f64,
    hardware_cost: f64,
    pool_fee: f64,
    maintenance_cost: f64,
    difficulty: f64,
    daily_profit: f64,
    monthly_profit: f64,
    roi: f64,
    break_even_days: i32,
    co2_saved: f64,
    trees_compensated: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl CalculationRow {
    fn into_calculation(self) -> MiningCalculation {
        MiningCalculation {
            id: self.id,
            wallet_address: self.wallet_address,
            hashrate: self.hashrate,
            power_cost: self.power_cost,
            hardware_cost: self.hardware_cost,
            pool_fee: self.pool_fee,
            maintenance_cost: self.maintenance_cost,
            difficulty: self.difficulty,
            daily_profit: self.daily_profit,
            monthly_profit: self.monthly_profit,
            roi: self.roi,
            break_even_days: self.break_even_days,
            co2_saved: self.co2_saved,
            trees_compensated: self.trees_compensated,
            created_at: self.created_at,
        }
    }
}
