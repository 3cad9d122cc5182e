//! HTTP Handlers

use crate::application::calculate::{CalculateInput, CalculateProfitabilityUseCase};
use crate::application::config::MiningConfig;
use crate::application::history::CalculationHistoryUseCase;
use crate::domain::catalog::{DIFFICULTY, DifficultyTable, EQUIPMENT, Equipment};
use crate::domain::repository::CalculationRepository;
use crate::domain::value_objects::MiningParameters;
use crate::error::MiningResult;
use crate::presentation::dto::{CalculationRecordDto, CalculationResponse, HistoryQuery};
use axum::extract::{Path, State};
use kernel::envelope::ApiResponse;
use kernel::extract::{AppJson, AppQuery};
use kernel::validation::{JsonObject, as_object, coerce_f64, optional_f64, optional_string, require_param};
use serde_json::Value;
use std::sync::Arc;

const REQUIRED_PARAMS: [&str; 5] = [
    "hashrate",
    "power_cost",
    "hardware_cost",
    "pool_fee",
    "maintenance_cost",
];

/// Shared state for mining handlers
#[derive(Clone)]
pub struct MiningAppState<R>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<MiningConfig>,
}

/// POST /api/mining/calculate
pub async fn calculate<R>(
    State(state): State<MiningAppState<R>>,
    AppJson(body): AppJson<Value>,
) -> MiningResult<ApiResponse<CalculationResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let input = parse_calculate_input(&body)?;

    let use_case = CalculateProfitabilityUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(ApiResponse::ok(CalculationResponse::from(output)).with_timestamp())
}

/// GET /api/mining/equipment
pub async fn equipment() -> ApiResponse<&'static [Equipment]> {
    ApiResponse::ok(EQUIPMENT).with_timestamp()
}

/// GET /api/mining/difficulty
pub async fn difficulty() -> ApiResponse<DifficultyTable> {
    ApiResponse::ok(DIFFICULTY).with_timestamp()
}

/// GET /api/mining/history/{address}
pub async fn history<R>(
    State(state): State<MiningAppState<R>>,
    Path(address): Path<String>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> MiningResult<ApiResponse<Vec<CalculationRecordDto>>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = CalculationHistoryUseCase::new(state.repo.clone(), state.config.clone());
    let calculations = use_case.execute(&address, query.limit).await?;

    Ok(ApiResponse::ok(
        calculations
            .into_iter()
            .map(CalculationRecordDto::from)
            .collect(),
    ))
}

/// Presence of every required parameter is checked before any coercion
fn parse_calculate_input(body: &Value) -> MiningResult<CalculateInput> {
    let body = as_object(body)?;
    for name in REQUIRED_PARAMS {
        require_param(body, name)?;
    }

    let params = MiningParameters::new(
        param(body, "hashrate")?,
        param(body, "power_cost")?,
        param(body, "hardware_cost")?,
        param(body, "pool_fee")?,
        param(body, "maintenance_cost")?,
        optional_f64(body, "difficulty")?,
    )?;

    Ok(CalculateInput {
        params,
        wallet_address: optional_string(body, "wallet_address")?.unwrap_or_default(),
    })
}

fn param(body: &JsonObject, name: &str) -> MiningResult<f64> {
    Ok(coerce_f64(name, require_param(body, name)?)?)
}
