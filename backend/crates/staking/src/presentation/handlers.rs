//! HTTP Handlers

use crate::application::config::StakingConfig;
use crate::application::history::PoolHistoryUseCase;
use crate::application::stats::{PoolStatsUseCase, UpdateStatsUseCase};
use crate::domain::catalog::{LEADERBOARD, USER_STAKES, sum_amounts};
use crate::domain::entities::StatsUpdate;
use crate::domain::repository::StakingStatsRepository;
use crate::error::StakingResult;
use crate::presentation::dto::{
    HistoryPointDto, HistoryQuery, HistoryResponse, LeaderboardResponse, PoolStatsResponse,
    UserStakesResponse,
};
use axum::extract::{Path, State};
use kernel::envelope::ApiResponse;
use kernel::extract::{AppJson, AppQuery};
use kernel::validation::{as_object, optional_f64, optional_i64};
use serde_json::Value;
use std::sync::Arc;

/// Shared state for staking handlers
#[derive(Clone)]
pub struct StakingAppState<R>
where
    R: StakingStatsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<StakingConfig>,
}

/// GET /api/pool/stats
pub async fn stats<R>(
    State(state): State<StakingAppState<R>>,
) -> StakingResult<ApiResponse<PoolStatsResponse>>
where
    R: StakingStatsRepository + Clone + Send + Sync + 'static,
{
    let use_case = PoolStatsUseCase::new(state.repo.clone(), state.config.clone());
    let stats = use_case.execute().await?;

    Ok(ApiResponse::ok(PoolStatsResponse::from(stats)))
}

/// PUT /api/pool/update_stats
pub async fn update_stats<R>(
    State(state): State<StakingAppState<R>>,
    AppJson(body): AppJson<Value>,
) -> StakingResult<ApiResponse<()>>
where
    R: StakingStatsRepository + Clone + Send + Sync + 'static,
{
    let body = as_object(&body)?;
    let update = StatsUpdate {
        total_staked: optional_f64(body, "total_staked")?,
        total_rewards: optional_f64(body, "total_rewards")?,
        active_stakers: optional_i64(body, "active_stakers")?,
        current_apr: optional_f64(body, "current_apr")?,
    };

    UpdateStatsUseCase::new(state.repo.clone())
        .execute(update)
        .await?;

    Ok(ApiResponse::message("Statistics updated successfully"))
}

/// GET /api/pool/leaderboard
pub async fn leaderboard() -> ApiResponse<LeaderboardResponse> {
    ApiResponse::ok(LeaderboardResponse {
        leaderboard: LEADERBOARD,
        last_updated: chrono::Utc::now(),
    })
}

/// GET /api/pool/history
pub async fn history<R>(
    State(state): State<StakingAppState<R>>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> ApiResponse<HistoryResponse>
where
    R: StakingStatsRepository + Clone + Send + Sync + 'static,
{
    let (days, series) = PoolHistoryUseCase::new(state.config.clone()).execute(query.days);

    ApiResponse::ok(HistoryResponse {
        history: series.into_iter().map(HistoryPointDto::from).collect(),
        period: format!("{days} days"),
    })
}

/// GET /api/pool/user_stakes/{address}
pub async fn user_stakes(Path(address): Path<String>) -> ApiResponse<UserStakesResponse> {
    let total_staked = sum_amounts(USER_STAKES.iter().map(|s| s.amount));
    let total_pending = sum_amounts(USER_STAKES.iter().map(|s| s.pending_rewards));

    ApiResponse::ok(UserStakesResponse {
        address,
        stakes: USER_STAKES,
        total_staked: total_staked.to_string(),
        total_pending_rewards: total_pending.to_string(),
    })
}
