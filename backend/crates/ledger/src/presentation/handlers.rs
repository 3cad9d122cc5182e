//! HTTP Handlers

use crate::application::config::LedgerConfig;
use crate::application::history::TransactionHistoryUseCase;
use crate::application::log::LogTransactionUseCase;
use crate::application::stats::TransactionStatsUseCase;
use crate::application::status::UpdateStatusUseCase;
use crate::domain::entities::{DEFAULT_STATUS, NewTransaction};
use crate::domain::repository::TransactionRepository;
use crate::error::{LedgerError, LedgerResult};
use crate::presentation::dto::{HistoryQuery, HistoryResponse, LoggedTransactionDto, StatsResponse};
use axum::extract::{Path, State};
use kernel::envelope::ApiResponse;
use kernel::extract::{AppJson, AppQuery};
use kernel::validation::{
    as_object, coerce_string, optional_field, optional_string, require_field, required_i64,
    required_string,
};
use serde_json::Value;
use std::sync::Arc;

const REQUIRED_FIELDS: [&str; 8] = [
    "hash",
    "from_address",
    "to_address",
    "value",
    "gas_price",
    "gas_used",
    "block_number",
    "transaction_type",
];

/// Shared state for ledger handlers
#[derive(Clone)]
pub struct LedgerAppState<R>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<LedgerConfig>,
}

/// POST /api/transactions/log
pub async fn log_transaction<R>(
    State(state): State<LedgerAppState<R>>,
    AppJson(body): AppJson<Value>,
) -> LedgerResult<ApiResponse<LoggedTransactionDto>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let transaction = parse_new_transaction(&body)?;

    let use_case = LogTransactionUseCase::new(state.repo.clone());
    let stored = use_case.execute(transaction).await?;

    Ok(ApiResponse::ok(LoggedTransactionDto::from(stored))
        .with_message("Transaction recorded successfully"))
}

/// GET /api/transactions/history/{address}
pub async fn history<R>(
    State(state): State<LedgerAppState<R>>,
    Path(address): Path<String>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> LedgerResult<ApiResponse<HistoryResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = TransactionHistoryUseCase::new(state.repo.clone(), state.config.clone());
    let page = use_case.execute(query.into_input(address)).await?;

    Ok(ApiResponse::ok(HistoryResponse::from(page)))
}

/// GET /api/transactions/stats
pub async fn stats<R>(
    State(state): State<LedgerAppState<R>>,
) -> LedgerResult<ApiResponse<StatsResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = TransactionStatsUseCase::new(state.repo.clone(), state.config.clone());
    let stats = use_case.execute().await?;

    Ok(ApiResponse::ok(StatsResponse::from(stats)))
}

/// PUT /api/transactions/update_status
pub async fn update_status<R>(
    State(state): State<LedgerAppState<R>>,
    AppJson(body): AppJson<Value>,
) -> LedgerResult<ApiResponse<()>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let body = as_object(&body)?;
    let (Some(hash), Some(status)) = (optional_field(body, "hash"), optional_field(body, "status"))
    else {
        return Err(LedgerError::MissingStatusFields);
    };
    let hash = coerce_string("hash", hash)?;
    let status = coerce_string("status", status)?;

    UpdateStatusUseCase::new(state.repo.clone())
        .execute(&hash, &status)
        .await?;

    Ok(ApiResponse::message("Status updated successfully"))
}

/// Presence of every required field is checked before any coercion
fn parse_new_transaction(body: &Value) -> LedgerResult<NewTransaction> {
    let body = as_object(body)?;
    for name in REQUIRED_FIELDS {
        require_field(body, name)?;
    }

    Ok(NewTransaction {
        hash: required_string(body, "hash")?,
        from_address: required_string(body, "from_address")?,
        to_address: required_string(body, "to_address")?,
        value: required_string(body, "value")?,
        gas_price: required_string(body, "gas_price")?,
        gas_used: required_string(body, "gas_used")?,
        block_number: required_i64(body, "block_number")?,
        transaction_type: required_string(body, "transaction_type")?,
        status: optional_string(body, "status")?.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    })
}
