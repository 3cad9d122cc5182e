//! PostgreSQL Repository Implementations
//!
//! `staking_stats` holds at most one row (`id = 1`, enforced by a check
//! constraint), created with `INSERT .. ON CONFLICT DO NOTHING` so that
//! concurrent first requests agree on a single record.

use crate::domain::entities::{StakingStats, StatsDefaults, StatsUpdate};
use crate::domain::repository::StakingStatsRepository;
use crate::error::StakingResult;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgStakingStatsRepository {
    pool: PgPool,
}

impl PgStakingStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn ensure_row<'e, E>(executor: E, defaults: &StatsDefaults) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO staking_stats (id, total_staked, total_rewards, active_stakers, current_apr)
        VALUES (1, $1, $2, $3, $4)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(defaults.total_staked)
    .bind(defaults.total_rewards)
    .bind(defaults.active_stakers)
    .bind(defaults.current_apr)
    .execute(executor)
    .await?;
    Ok(())
}

impl StakingStatsRepository for PgStakingStatsRepository {
    async fn get_or_create(&self, defaults: &StatsDefaults) -> StakingResult<StakingStats> {
        ensure_row(&self.pool, defaults).await?;

        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT total_staked, total_rewards, active_stakers, current_apr, last_updated
            FROM staking_stats
            WHERE id = 1
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_stats())
    }

    async fn update(
        &self,
        update: &StatsUpdate,
        defaults: &StatsDefaults,
    ) -> StakingResult<StakingStats> {
        let mut tx = self.pool.begin().await?;

        ensure_row(&mut *tx, defaults).await?;

        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            UPDATE staking_stats
            SET total_staked = COALESCE($1, total_staked),
                total_rewards = COALESCE($2, total_rewards),
                active_stakers = COALESCE($3, active_stakers),
                current_apr = COALESCE($4, current_apr),
                last_updated = NOW()
            WHERE id = 1
            RETURNING total_staked, total_rewards, active_stakers, current_apr, last_updated
            "#,
        )
        .bind(update.total_staked)
        .bind(update.total_rewards)
        .bind(update.active_stakers)
        .bind(update.current_apr)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_stats())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct StatsRow {
    total_staked: f64,
    total_rewards: f64,
    active_stakers: i64,
    current_apr: f64,
    last_updated: DateTime<Utc>,
}

impl StatsRow {
    fn into_stats(self) -> StakingStats {
        StakingStats {
            total_staked: self.total_staked,
            total_rewards: self.total_rewards,
            active_stakers: self.active_stakers,
            current_apr: self.current_apr,
            last_updated: self.last_updated,
        }
    }
}
