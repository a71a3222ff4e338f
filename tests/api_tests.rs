mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use whalescope::api::router::create_router;
use whalescope::services::refresher;

async fn build_test_app() -> axum::Router {
    let state = common::build_demo_state();
    // Populate the snapshot inline instead of spawning the background loop
    refresher::refresh_snapshot(&state).await;
    create_router(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mode"], "demo");
    assert!(json["last_refresh"].is_string());
}

#[tokio::test]
async fn test_wallet_list() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/api/wallets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let wallets = json["data"].as_array().unwrap();
    // Every roster wallet has positive equity, so none are filtered
    assert_eq!(wallets.len(), 30);

    for w in wallets {
        assert!(w["address"].as_str().unwrap().starts_with("0x"));
        assert!(w["bias"].is_string());
        assert!(w["cohort"].is_string());
        assert!(w["position_count"].as_u64().unwrap() >= 1);
        assert_eq!(w["source"], "synthetic");
    }
}

#[tokio::test]
async fn test_wallet_detail() {
    let app = build_test_app().await;
    let address = "0xffbd3e51ae0e2c4407434e157965c064f2a11628";
    let (status, json) = get_json(app, &format!("/api/wallets/{address}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["summary"]["address"], address);

    let positions = json["data"]["positions"].as_array().unwrap();
    assert!(!positions.is_empty());
    for p in positions {
        assert!(p["token"].is_string());
        assert!(p["direction"] == "long" || p["direction"] == "short");
    }
}

#[tokio::test]
async fn test_wallet_detail_unknown_address_is_404() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/api/wallets/0xdeadbeef").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_market_screener() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/api/market").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["source"], "synthetic");

    let aggregates = json["data"]["aggregates"].as_array().unwrap();
    assert_eq!(aggregates.len(), 6);
    for a in aggregates {
        assert!(a["token"].is_string());
        assert!(a["trader_count"].is_number());
    }
}

#[tokio::test]
async fn test_dashboard_summary() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/api/dashboard/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tracked_wallets"], 30);
    assert_eq!(json["wallets_loaded"], 30);
    assert_eq!(json["load_progress"], 30);
    assert_eq!(json["load_total"], 30);
    assert!(json["market_bias"].is_string());
    // 30 wallet fallbacks + the synthetic screener
    assert_eq!(json["synthetic_sources"], 31);
    assert!(json["refreshed_at"].is_string());
    // No credential configured, so no credits spent
    assert!(json["api_usage"].is_null());
}

#[tokio::test]
async fn test_usage_is_null_in_demo_mode() {
    let app = build_test_app().await;
    let (status, json) = get_json(app, "/api/usage").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_manual_refresh_trigger() {
    let app = build_test_app().await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = build_test_app().await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let _text = String::from_utf8(body.to_vec()).unwrap();
    // Endpoint returns valid text; metric names may or may not appear
    // depending on global recorder state in tests (one recorder per process).
}
