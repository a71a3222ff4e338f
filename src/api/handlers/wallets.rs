use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::ApiResponse;
use crate::analytics::WalletPositionSummary;
use crate::errors::AppError;
use crate::models::Position;
use crate::AppState;

#[derive(Serialize)]
pub struct WalletDetail {
    pub summary: WalletPositionSummary,
    pub positions: Vec<Position>,
}

/// GET /api/wallets — the summary table, zero-equity wallets already
/// filtered, sorted by position value descending.
pub async fn list(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<WalletPositionSummary>>> {
    let snapshot = state.snapshot.read().await;
    Json(ApiResponse::ok(snapshot.wallets.clone()))
}

/// GET /api/wallets/:address — the detail view behind the position modal.
pub async fn detail(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<WalletDetail>>, AppError> {
    let snapshot = state.snapshot.read().await;

    let summary = snapshot
        .wallets
        .iter()
        .find(|w| w.address.eq_ignore_ascii_case(&address))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("wallet {address} not tracked")))?;

    let positions = snapshot
        .positions
        .get(&summary.address)
        .cloned()
        .unwrap_or_default();

    Ok(Json(ApiResponse::ok(WalletDetail { summary, positions })))
}
