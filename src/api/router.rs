use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    let api = Router::new()
        // Dashboard
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        // Wallets
        .route("/api/wallets", get(handlers::wallets::list))
        .route("/api/wallets/:address", get(handlers::wallets::detail))
        // Market screener
        .route("/api/market", get(handlers::market::list))
        // Analytics API spend
        .route("/api/usage", get(handlers::usage::summary))
        // Control
        .route("/api/refresh", post(handlers::control::refresh));

    // CORS: the dashboard front end is served from a different origin in dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
