pub mod analytics;
pub mod api;
pub mod cache;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod nansen;
pub mod roster;
pub mod services;
pub mod synthetic;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};

use crate::cache::FetchCache;
use crate::config::AppConfig;
use crate::models::WalletInfo;
use crate::nansen::NansenClient;
use crate::services::refresher::{DashboardSnapshot, LoadProgress};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Tracked wallets; built once at startup, immutable afterwards.
    pub roster: Arc<Vec<WalletInfo>>,
    /// None in offline demo mode.
    pub client: Option<NansenClient>,
    pub cache: FetchCache,
    pub snapshot: Arc<RwLock<DashboardSnapshot>>,
    pub progress: Arc<LoadProgress>,
    /// Wakes the refresher ahead of its interval (manual refresh).
    pub refresh: Arc<Notify>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        roster: Vec<WalletInfo>,
        client: Option<NansenClient>,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let cache = FetchCache::new(Duration::from_secs(config.cache_ttl_secs), 1024);

        Self {
            config,
            roster: Arc::new(roster),
            client,
            cache,
            snapshot: Arc::new(RwLock::new(DashboardSnapshot::default())),
            progress: Arc::new(LoadProgress::default()),
            refresh: Arc::new(Notify::new()),
            metrics_handle,
        }
    }
}
