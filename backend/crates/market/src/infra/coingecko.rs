//! CoinGecko Price Source
//!
//! `GET {base}/simple/price` for spot quotes and
//! `GET {base}/coins/{id}/market_chart` for daily history.

use crate::domain::entities::{PriceHistory, PricePoint, SpotPrice};
use crate::domain::source::PriceSource;
use crate::error::{MarketError, MarketResult};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Clone)]
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> MarketResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
struct SimplePrice {
    #[serde(default)]
    usd: f64,
    #[serde(default)]
    eur: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
    #[serde(default)]
    usd_market_cap: Option<f64>,
    #[serde(default)]
    usd_24h_vol: Option<f64>,
    #[serde(default)]
    last_updated_at: Option<i64>,
}

impl SimplePrice {
    fn into_spot(self, now: i64) -> SpotPrice {
        SpotPrice {
            usd: self.usd,
            eur: self.eur,
            change_24h: self.usd_24h_change.unwrap_or_default(),
            market_cap: self.usd_market_cap.unwrap_or_default(),
            volume_24h: self.usd_24h_vol.unwrap_or_default(),
            last_updated: self.last_updated_at.unwrap_or(now),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
    #[serde(default)]
    market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    total_volumes: Vec<(f64, f64)>,
}

impl From<MarketChart> for PriceHistory {
    fn from(chart: MarketChart) -> Self {
        PriceHistory {
            prices: chart
                .prices
                .into_iter()
                .map(|(timestamp, price)| PricePoint {
                    timestamp: timestamp as i64,
                    price,
                })
                .collect(),
            market_caps: chart.market_caps,
            total_volumes: chart.total_volumes,
        }
    }
}

impl PriceSource for CoinGeckoClient {
    async fn fetch_spot(&self, asset_id: &str) -> MarketResult<Option<SpotPrice>> {
        let response = self
            .client
            .get(format!("{}/simple/price", self.base_url))
            .query(&[
                ("ids", asset_id),
                ("vs_currencies", "usd,eur"),
                ("include_24hr_change", "true"),
                ("include_market_cap", "true"),
                ("include_24hr_vol", "true"),
                ("include_last_updated_at", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketError::UpstreamStatus(response.status().as_u16()));
        }

        let mut body: HashMap<String, SimplePrice> = response.json().await?;
        let now = chrono::Utc::now().timestamp();

        Ok(body.remove(asset_id).map(|p| p.into_spot(now)))
    }

    async fn fetch_history(&self, asset_id: &str, days: u32) -> MarketResult<PriceHistory> {
        let days = days.to_string();
        let response = self
            .client
            .get(format!("{}/coins/{}/market_chart", self.base_url, asset_id))
            .query(&[
                ("vs_currency", "usd"),
                ("days", days.as_str()),
                ("interval", "daily"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketError::UpstreamStatus(response.status().as_u16()));
        }

        let chart: MarketChart = response.json().await?;
        Ok(chart.into())
    }
}
