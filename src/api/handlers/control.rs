use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

/// POST /api/refresh — drop the cache and wake the refresher. The rebuild
/// happens in the background; poll the dashboard summary for progress.
pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    state.cache.invalidate_all();
    state.refresh.notify_one();

    tracing::info!("Manual refresh requested");
    (StatusCode::ACCEPTED, Json(json!({ "status": "refresh_triggered" })))
}
