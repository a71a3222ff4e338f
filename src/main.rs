use metrics::gauge;

use whalescope::api::router::create_router;
use whalescope::config::AppConfig;
use whalescope::nansen::NansenClient;
use whalescope::services::{refresher, seeder};
use whalescope::{metrics as app_metrics, roster, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = app_metrics::init_metrics();

    if !config.has_nansen_auth() {
        tracing::warn!("NANSEN_API_KEY not set — running in offline demo mode on synthetic data");
    }
    let client = config
        .nansen_api_key
        .clone()
        .map(|key| NansenClient::new(reqwest::Client::new(), key));

    // --- Roster: static list, optionally extended from the leaderboard ---
    let mut roster = roster::whale_roster();
    if let Some(client) = client.as_ref().filter(|_| config.leaderboard_seed_enabled) {
        match seeder::seed_roster_from_leaderboard(client, &config, &mut roster).await {
            Ok(added) => tracing::info!(added, "Leaderboard seeding complete"),
            Err(e) => {
                tracing::warn!(error = %e, "Leaderboard seeding failed — continuing with static roster");
            }
        }
    }
    gauge!("tracked_wallets").set(roster.len() as f64);
    tracing::info!(wallets = roster.len(), "Roster loaded");

    let state = AppState::new(config, roster, client, metrics_handle);

    // --- Background refresher: periodic + on-demand snapshot rebuilds ---
    let refresher_state = state.clone();
    tokio::spawn(async move {
        refresher::run_refresher(refresher_state).await;
    });

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
