//! HTTP Handlers

use crate::application::config::MarketConfig;
use crate::application::prices::{LivePricesUseCase, PriceHistoryUseCase};
use crate::application::quote::SwapQuoteUseCase;
use crate::domain::cache::PriceCache;
use crate::domain::catalog::{Liquidity, TOKENS, TokenInfo, liquidity};
use crate::domain::entities::{PriceHistory, SpotPrice};
use crate::domain::source::PriceSource;
use crate::error::{MarketError, MarketResult};
use crate::presentation::dto::{HistoryQuery, QuoteQuery, QuoteResponse};
use axum::extract::{Path, State};
use kernel::envelope::ApiResponse;
use kernel::extract::AppQuery;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared state for price handlers
pub struct PricesAppState<S>
where
    S: PriceSource + Send + Sync + 'static,
{
    pub cache: Arc<PriceCache<S>>,
    pub config: Arc<MarketConfig>,
}

impl<S> Clone for PricesAppState<S>
where
    S: PriceSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /api/prices/live
pub async fn live_prices<S>(
    State(state): State<PricesAppState<S>>,
) -> ApiResponse<BTreeMap<String, SpotPrice>>
where
    S: PriceSource + Send + Sync + 'static,
{
    let use_case = LivePricesUseCase::new(state.cache.clone(), state.config.clone());
    ApiResponse::ok(use_case.execute().await).with_timestamp()
}

/// GET /api/prices/history/{id}
pub async fn price_history<S>(
    State(state): State<PricesAppState<S>>,
    Path(asset_id): Path<String>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> MarketResult<ApiResponse<PriceHistory>>
where
    S: PriceSource + Send + Sync + 'static,
{
    let use_case = PriceHistoryUseCase::new(state.cache.clone(), state.config.clone());
    let history = use_case.execute(&asset_id, query.days).await?;

    Ok(ApiResponse::ok(history))
}

/// GET /api/dex/quote
pub async fn swap_quote(
    AppQuery(query): AppQuery<QuoteQuery>,
) -> MarketResult<ApiResponse<QuoteResponse>> {
    let quote = SwapQuoteUseCase::execute(query.into())?;
    Ok(ApiResponse::ok(QuoteResponse::from(quote)).with_timestamp())
}

/// GET /api/dex/tokens
pub async fn tokens() -> ApiResponse<&'static [TokenInfo]> {
    ApiResponse::ok(TOKENS).with_timestamp()
}

/// GET /api/dex/liquidity/{pair}
pub async fn pair_liquidity(
    Path(pair): Path<String>,
) -> MarketResult<ApiResponse<&'static Liquidity>> {
    let pair = pair.to_uppercase();
    let info = liquidity(&pair).ok_or(MarketError::PairNotFound(pair))?;
    Ok(ApiResponse::ok(info).with_timestamp())
}
