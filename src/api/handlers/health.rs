use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;

    Json(json!({
        "status": "healthy",
        "mode": if state.client.is_some() { "live" } else { "demo" },
        "last_refresh": snapshot.refreshed_at,
    }))
}
