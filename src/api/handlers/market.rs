use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiResponse;
use crate::models::{DataSource, MarketAggregate};
use crate::AppState;

#[derive(Serialize)]
pub struct MarketView {
    pub source: Option<DataSource>,
    pub aggregates: Vec<MarketAggregate>,
}

/// GET /api/market — the per-token screener table, sorted by combined
/// notional descending.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<MarketView>> {
    let snapshot = state.snapshot.read().await;

    Json(ApiResponse::ok(MarketView {
        source: snapshot.market_source,
        aggregates: snapshot.market.clone(),
    }))
}
