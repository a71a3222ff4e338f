use axum::extract::State;
use axum::Json;

use super::ApiResponse;
use crate::nansen::UsageSummary;
use crate::AppState;

/// GET /api/usage — analytics API credit spend. `data` is null in offline
/// demo mode, where no credits are ever consumed.
pub async fn summary(State(state): State<AppState>) -> Json<ApiResponse<Option<UsageSummary>>> {
    Json(ApiResponse::ok(
        state.client.as_ref().map(|c| c.usage_summary()),
    ))
}
