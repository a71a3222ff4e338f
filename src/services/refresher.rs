use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt};
use metrics::{counter, gauge, histogram};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::time::{interval, Duration};

use crate::analytics::{self, MarketBias, WalletPositionSummary};
use crate::cache::{MarketEntry, PositionsEntry};
use crate::models::{DataSource, MarketAggregate, Position, WalletInfo};
use crate::synthetic;
use crate::AppState;

// ---------------------------------------------------------------------------
// Load progress
// ---------------------------------------------------------------------------

/// Completion counter for the current refresh cycle.
///
/// A partially loaded snapshot is a valid, displayable state; the UI polls
/// this to render its loading bar.
#[derive(Debug, Default)]
pub struct LoadProgress {
    loaded: AtomicUsize,
    total: AtomicUsize,
}

impl LoadProgress {
    fn begin(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.loaded.store(0, Ordering::Relaxed);
    }

    fn record_one(&self) {
        self.loaded.fetch_add(1, Ordering::Relaxed);
    }

    /// (loaded, total) for the cycle in flight.
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.loaded.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }
}

// ---------------------------------------------------------------------------
// Dashboard snapshot
// ---------------------------------------------------------------------------

/// Everything the API serves, rebuilt wholesale on each refresh.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    /// Per-wallet summaries, zero-equity wallets filtered out, sorted by
    /// position value descending.
    pub wallets: Vec<WalletPositionSummary>,
    /// Raw position lists backing the wallet detail view.
    pub positions: HashMap<String, Vec<Position>>,
    /// Market screener rows (live or synthetic).
    pub market: Vec<MarketAggregate>,
    pub market_source: Option<DataSource>,
    /// Market-level bias recomputed from the loaded position set.
    pub market_bias: Option<MarketBias>,
    /// How many sources (wallets + screener) fell back to synthetic data this
    /// cycle; non-zero drives the "some data could not be refreshed" banner.
    pub synthetic_sources: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Refresh loop
// ---------------------------------------------------------------------------

/// Periodic refresher. Runs a full snapshot rebuild every
/// `refresh_interval_secs`, or immediately when the refresh trigger fires.
pub async fn run_refresher(state: AppState) {
    let mut ticker = interval(Duration::from_secs(state.config.refresh_interval_secs));
    tracing::info!(
        interval_secs = state.config.refresh_interval_secs,
        wallets = state.roster.len(),
        "Refresher started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = state.refresh.notified() => {
                tracing::info!("Refresh triggered via control API");
            }
        }

        refresh_snapshot(&state).await;
    }
}

/// Rebuild the dashboard snapshot: fetch every roster wallet concurrently
/// (bounded), fetch the market screener, derive all summaries, and publish.
pub async fn refresh_snapshot(state: &AppState) {
    let started = Instant::now();
    state.progress.begin(state.roster.len());

    let loads: Vec<(WalletInfo, Arc<PositionsEntry>)> = stream::iter(state.roster.iter().cloned())
        .map(|info| {
            let state = state.clone();
            async move {
                let entry = load_wallet(&state, &info).await;
                state.progress.record_one();
                (info, entry)
            }
        })
        .buffer_unordered(state.config.fetch_concurrency)
        .collect()
        .await;

    let market_entry = load_market(state).await;

    // Derived views. Wallets with no equity carry no signal and are dropped.
    let mut wallets: Vec<WalletPositionSummary> = loads
        .iter()
        .filter(|(info, _)| info.account_value > Decimal::ZERO)
        .map(|(info, entry)| analytics::summarize_wallet(info, &entry.positions, entry.source))
        .collect();
    wallets.sort_by(|a, b| b.position_value.cmp(&a.position_value));

    let positions: HashMap<String, Vec<Position>> = loads
        .iter()
        .map(|(info, entry)| (info.address.clone(), entry.positions.clone()))
        .collect();

    let token_aggregates =
        analytics::aggregate_by_token(loads.iter().map(|(_, e)| e.positions.as_slice()));
    let long_total: Decimal = token_aggregates.iter().map(|a| a.long_notional).sum();
    let short_total: Decimal = token_aggregates.iter().map(|a| a.short_notional).sum();
    let market_bias = analytics::market_bias(long_total, short_total);

    let synthetic_sources = loads
        .iter()
        .filter(|(_, e)| e.source.is_synthetic())
        .count()
        + usize::from(market_entry.source.is_synthetic());

    let snapshot = DashboardSnapshot {
        wallets,
        positions,
        market: market_entry.aggregates.clone(),
        market_source: Some(market_entry.source),
        market_bias: Some(market_bias),
        synthetic_sources,
        refreshed_at: Some(Utc::now()),
    };

    let loaded = snapshot.wallets.len();
    *state.snapshot.write().await = snapshot;

    counter!("refreshes_total").increment(1);
    gauge!("wallets_loaded").set(loaded as f64);
    histogram!("refresh_duration_seconds").record(started.elapsed().as_secs_f64());

    tracing::info!(
        wallets = loaded,
        synthetic_sources = synthetic_sources,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Refresh cycle complete"
    );
}

/// One wallet's positions: cache first, then the API, then the deterministic
/// synthetic fallback. Never fails.
async fn load_wallet(state: &AppState, info: &WalletInfo) -> Arc<PositionsEntry> {
    state
        .cache
        .wallet_positions(&info.address, || async {
            let Some(client) = &state.client else {
                // Offline demo mode: no credential configured
                return synthetic_positions(info);
            };

            match client.wallet_positions(&info.address).await {
                Ok(api_positions) => {
                    counter!("wallet_fetches_total").increment(1);
                    let positions = api_positions
                        .into_iter()
                        .filter_map(|p| p.into_position())
                        .collect();
                    PositionsEntry {
                        positions,
                        source: DataSource::Live,
                    }
                }
                Err(e) => {
                    counter!("wallet_fetch_failures_total").increment(1);
                    tracing::warn!(
                        error = %e,
                        address = %info.address,
                        "Position fetch failed — serving synthetic data"
                    );
                    synthetic_positions(info)
                }
            }
        })
        .await
}

fn synthetic_positions(info: &WalletInfo) -> PositionsEntry {
    counter!("synthetic_fallbacks_total").increment(1);
    PositionsEntry {
        positions: synthetic::generate_positions(&info.address, info.account_value),
        source: DataSource::Synthetic,
    }
}

/// The market screener: cache, API, synthetic fallback over the roster.
async fn load_market(state: &AppState) -> Arc<MarketEntry> {
    state
        .cache
        .market(|| async {
            let Some(client) = &state.client else {
                return synthetic_market(state);
            };

            match client.perp_screener().await {
                Ok(rows) => {
                    let aggregates = rows
                        .into_iter()
                        .filter_map(|r| r.into_aggregate())
                        .collect();
                    MarketEntry {
                        aggregates,
                        source: DataSource::Live,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Screener fetch failed — serving synthetic data");
                    synthetic_market(state)
                }
            }
        })
        .await
}

fn synthetic_market(state: &AppState) -> MarketEntry {
    counter!("synthetic_fallbacks_total").increment(1);
    MarketEntry {
        aggregates: synthetic::generate_market(&state.roster),
        source: DataSource::Synthetic,
    }
}
