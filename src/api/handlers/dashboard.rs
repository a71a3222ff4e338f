use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::MarketBias;
use crate::nansen::UsageSummary;
use crate::AppState;

#[derive(Serialize)]
pub struct DashboardSummary {
    pub tracked_wallets: usize,
    pub wallets_loaded: usize,
    pub load_progress: usize,
    pub load_total: usize,
    pub total_position_value: Decimal,
    pub total_unrealized_pnl: Decimal,
    pub market_bias: Option<MarketBias>,
    pub synthetic_sources: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub api_usage: Option<UsageSummary>,
}

pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let snapshot = state.snapshot.read().await;
    let (load_progress, load_total) = state.progress.snapshot();

    let total_position_value: Decimal = snapshot.wallets.iter().map(|w| w.position_value).sum();
    let total_unrealized_pnl: Decimal = snapshot.wallets.iter().map(|w| w.unrealized_pnl).sum();

    Json(DashboardSummary {
        tracked_wallets: state.roster.len(),
        wallets_loaded: snapshot.wallets.len(),
        load_progress,
        load_total,
        total_position_value,
        total_unrealized_pnl,
        market_bias: snapshot.market_bias,
        synthetic_sources: snapshot.synthetic_sources,
        refreshed_at: snapshot.refreshed_at,
        api_usage: state.client.as_ref().map(|c| c.usage_summary()),
    })
}
