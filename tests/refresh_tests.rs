mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use whalescope::config::AppConfig;
use whalescope::models::{Entity, WalletInfo};
use whalescope::services::refresher;
use whalescope::{metrics, AppState};

fn make_wallet(address: &str, account_value: Decimal) -> WalletInfo {
    WalletInfo {
        address: address.into(),
        label: format!("Wallet [{}]", &address[..8.min(address.len())]),
        entity: Entity::Retail,
        account_value,
        roi: Decimal::ZERO,
        total_pnl: Decimal::ZERO,
    }
}

#[tokio::test]
async fn test_refresh_populates_snapshot_and_progress() {
    let state = common::build_demo_state();
    refresher::refresh_snapshot(&state).await;

    let snapshot = state.snapshot.read().await;
    assert_eq!(snapshot.wallets.len(), 30);
    assert_eq!(snapshot.market.len(), 6);
    assert!(snapshot.refreshed_at.is_some());
    assert!(snapshot.market_bias.is_some());

    // Every wallet plus the screener came from the synthetic generator
    assert_eq!(snapshot.synthetic_sources, 31);
    assert_eq!(state.progress.snapshot(), (30, 30));
}

#[tokio::test]
async fn test_summaries_sorted_by_position_value() {
    let state = common::build_demo_state();
    refresher::refresh_snapshot(&state).await;

    let snapshot = state.snapshot.read().await;
    for pair in snapshot.wallets.windows(2) {
        assert!(pair[0].position_value >= pair[1].position_value);
    }
}

#[tokio::test]
async fn test_offline_refresh_is_deterministic() {
    // Two independent states (separate caches) must produce identical
    // synthetic snapshots for the same roster
    let a = common::build_demo_state();
    let b = common::build_demo_state();
    refresher::refresh_snapshot(&a).await;
    refresher::refresh_snapshot(&b).await;

    let sa = a.snapshot.read().await;
    let sb = b.snapshot.read().await;

    assert_eq!(sa.wallets.len(), sb.wallets.len());
    for (x, y) in sa.wallets.iter().zip(sb.wallets.iter()) {
        assert_eq!(x.address, y.address);
        assert_eq!(x.bias, y.bias);
        assert_eq!(x.position_value, y.position_value);
        assert_eq!(x.weighted_leverage, y.weighted_leverage);
        assert_eq!(x.unrealized_pnl, y.unrealized_pnl);
    }

    assert_eq!(sa.market_bias, sb.market_bias);
    for (x, y) in sa.market.iter().zip(sb.market.iter()) {
        assert_eq!(x.token, y.token);
        assert_eq!(x.long_notional, y.long_notional);
    }
}

#[tokio::test]
async fn test_repeat_refresh_hits_cache() {
    let state = common::build_demo_state();
    refresher::refresh_snapshot(&state).await;
    let first: Vec<_> = {
        let s = state.snapshot.read().await;
        s.wallets.iter().map(|w| (w.address.clone(), w.position_value)).collect()
    };

    // Second cycle inside the TTL serves the cached entries unchanged
    refresher::refresh_snapshot(&state).await;
    let snapshot = state.snapshot.read().await;
    let second: Vec<_> = snapshot
        .wallets
        .iter()
        .map(|w| (w.address.clone(), w.position_value))
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_zero_equity_wallets_are_filtered() {
    let roster = vec![
        make_wallet("0x1111111111111111111111111111111111111111", dec!(2_000_000)),
        make_wallet("0x2222222222222222222222222222222222222222", Decimal::ZERO),
        make_wallet("0x3333333333333333333333333333333333333333", dec!(750_000)),
    ];
    let state = AppState::new(
        AppConfig::offline_demo(),
        roster,
        None,
        metrics::init_metrics(),
    );

    refresher::refresh_snapshot(&state).await;

    let snapshot = state.snapshot.read().await;
    // All three count as loaded, the empty wallet is dropped from the view
    assert_eq!(state.progress.snapshot(), (3, 3));
    assert_eq!(snapshot.wallets.len(), 2);
    assert!(snapshot
        .wallets
        .iter()
        .all(|w| w.address != "0x2222222222222222222222222222222222222222"));
}
