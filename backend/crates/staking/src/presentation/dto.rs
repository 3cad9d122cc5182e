//! API DTOs (Data Transfer Objects)

use crate::domain::catalog::{LeaderboardEntry, UserStake};
use crate::domain::entities::{HistoryPoint, StakingStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for GET /api/pool/stats
///
/// Amounts are rendered as strings.
#[derive(Debug, Clone, Serialize)]
pub struct PoolStatsResponse {
    pub total_staked: String,
    pub total_rewards: String,
    pub active_stakers: i64,
    pub current_apr: f64,
    pub last_updated: DateTime<Utc>,
}

impl From<StakingStats> for PoolStatsResponse {
    fn from(s: StakingStats) -> Self {
        Self {
            total_staked: s.total_staked.to_string(),
            total_rewards: s.total_rewards.to_string(),
            active_stakers: s.active_stakers,
            current_apr: s.current_apr,
            last_updated: s.last_updated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: &'static [LeaderboardEntry],
    pub last_updated: DateTime<Utc>,
}

/// Query for GET /api/pool/history
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPointDto {
    pub date: String,
    pub total_staked: i64,
    pub total_rewards: i64,
    pub active_stakers: i64,
    pub apr: i64,
}

impl From<HistoryPoint> for HistoryPointDto {
    fn from(p: HistoryPoint) -> Self {
        Self {
            date: p.date,
            total_staked: p.total_staked,
            total_rewards: p.total_rewards,
            active_stakers: p.active_stakers,
            apr: p.apr,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryPointDto>,
    /// e.g. `30 days`
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserStakesResponse {
    pub address: String,
    pub stakes: &'static [UserStake],
    pub total_staked: String,
    pub total_pending_rewards: String,
}
