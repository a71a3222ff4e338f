use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use super::types::{ApiEnvelope, ApiLeaderboardEntry, ApiPosition, ApiScreenerRow};
use super::usage::{UsageSummary, UsageTracker};

const NANSEN_API_BASE: &str = "https://api.nansen.ai";

const WALLET_POSITIONS_ENDPOINT: &str = "/api/v1/profiler/perp-positions";
const PERP_SCREENER_ENDPOINT: &str = "/api/v1/tgm/perp-screener";
const PERP_LEADERBOARD_ENDPOINT: &str = "/api/v1/perp-leaderboard";

#[derive(Debug, Error)]
pub enum NansenClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Client for the analytics API.
///
/// All endpoints are HTTPS POST with the key passed in an `apiKey` header.
/// Every call is logged against the shared [`UsageTracker`] with its credit
/// cost.
#[derive(Debug, Clone)]
pub struct NansenClient {
    http: Client,
    base_url: String,
    api_key: String,
    usage: Arc<UsageTracker>,
}

impl NansenClient {
    pub fn new(http: Client, api_key: String) -> Self {
        Self {
            http,
            base_url: NANSEN_API_BASE.into(),
            api_key,
            usage: Arc::new(UsageTracker::default()),
        }
    }

    pub fn usage_summary(&self) -> UsageSummary {
        self.usage.summary()
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: serde_json::Value,
    ) -> Result<T, NansenClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let started = Instant::now();

        let result = async {
            let resp = self
                .http
                .post(&url)
                .header("apiKey", &self.api_key)
                .json(&payload)
                .send()
                .await?
                .error_for_status()?;

            let envelope: ApiEnvelope<T> = resp.json().await?;
            envelope
                .data
                .ok_or_else(|| NansenClientError::Unexpected(format!("{endpoint}: no data field")))
        }
        .await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        self.usage.log_call(endpoint, result.is_ok(), elapsed_ms);

        result
    }

    /// Fetch open perp positions for one wallet, largest first.
    pub async fn wallet_positions(
        &self,
        address: &str,
    ) -> Result<Vec<ApiPosition>, NansenClientError> {
        let payload = json!({
            "address": address,
            "order_by": [{"field": "position_value_usd", "direction": "DESC"}],
        });

        self.post(WALLET_POSITIONS_ENDPOINT, payload).await
    }

    /// Fetch the market-wide per-token screener.
    pub async fn perp_screener(&self) -> Result<Vec<ApiScreenerRow>, NansenClientError> {
        let payload = json!({
            "pagination": {"page": 1, "per_page": 100},
            "order_by": [{"field": "position_value_usd", "direction": "DESC"}],
        });

        self.post(PERP_SCREENER_ENDPOINT, payload).await
    }

    /// Fetch the perp trading leaderboard over the last 30 days, best PnL
    /// first.
    pub async fn perp_leaderboard(
        &self,
        min_account_value: Decimal,
        per_page: u32,
    ) -> Result<Vec<ApiLeaderboardEntry>, NansenClientError> {
        let date_to = Utc::now().date_naive();
        let date_from = date_to - Duration::days(30);

        let payload = json!({
            "date": {
                "from": date_from.format("%Y-%m-%d").to_string(),
                "to": date_to.format("%Y-%m-%d").to_string(),
            },
            "pagination": {"page": 1, "per_page": per_page},
            "filters": {"account_value": {"min": min_account_value}},
            "order_by": [{"field": "total_pnl", "direction": "DESC"}],
        });

        self.post(PERP_LEADERBOARD_ENDPOINT, payload).await
    }
}
