use whalescope::config::AppConfig;
use whalescope::{metrics, roster, AppState};

/// App state in offline demo mode: no credential, no network; every fetch
/// resolves to deterministic synthetic data.
pub fn build_demo_state() -> AppState {
    AppState::new(
        AppConfig::offline_demo(),
        roster::whale_roster(),
        None,
        metrics::init_metrics(),
    )
}
