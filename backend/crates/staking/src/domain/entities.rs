//! Domain Entities

use chrono::{DateTime, Utc};

/// The pool statistics row
#[derive(Debug, Clone, PartialEq)]
pub struct StakingStats {
    pub total_staked: f64,
    pub total_rewards: f64,
    pub active_stakers: i64,
    /// Stored APR, percent
    pub current_apr: f64,
    pub last_updated: DateTime<Utc>,
}

/// Values a freshly created statistics row starts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsDefaults {
    pub total_staked: f64,
    pub total_rewards: f64,
    pub active_stakers: i64,
    pub current_apr: f64,
}

impl StatsDefaults {
    /// Row created by a first read
    pub const SHOWCASE: Self = Self {
        total_staked: 1_250_000.0,
        total_rewards: 890_000.0,
        active_stakers: 2_847,
        current_apr: 65.0,
    };

    /// Row created by a first update
    pub const EMPTY: Self = Self {
        total_staked: 0.0,
        total_rewards: 0.0,
        active_stakers: 0,
        current_apr: 65.0,
    };

    pub fn into_stats(self, now: DateTime<Utc>) -> StakingStats {
        StakingStats {
            total_staked: self.total_staked,
            total_rewards: self.total_rewards,
            active_stakers: self.active_stakers,
            current_apr: self.current_apr,
            last_updated: now,
        }
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsUpdate {
    pub total_staked: Option<f64>,
    pub total_rewards: Option<f64>,
    pub active_stakers: Option<i64>,
    pub current_apr: Option<f64>,
}

impl StatsUpdate {
    /// Apply to `stats` and stamp `last_updated`
    pub fn apply(&self, stats: &mut StakingStats, now: DateTime<Utc>) {
        if let Some(v) = self.total_staked {
            stats.total_staked = v;
        }
        if let Some(v) = self.total_rewards {
            stats.total_rewards = v;
        }
        if let Some(v) = self.active_stakers {
            stats.active_stakers = v;
        }
        if let Some(v) = self.current_apr {
            stats.current_apr = v;
        }
        stats.last_updated = now;
    }
}

/// One day of the pool history series
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub total_staked: i64,
    pub total_rewards: i64,
    pub active_stakers: i64,
    pub apr: i64,
}
