use rust_decimal::Decimal;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Analytics API credential (optional — absent means offline demo mode)
    pub nansen_api_key: Option<String>,

    // Fetch orchestration
    pub cache_ttl_secs: u64,
    pub fetch_concurrency: usize,
    pub refresh_interval_secs: u64,

    // Leaderboard roster seeding
    pub leaderboard_seed_enabled: bool,
    pub leaderboard_min_account_value: Decimal,
    pub leaderboard_max_wallets: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            nansen_api_key: env::var("NANSEN_API_KEY").ok().filter(|k| !k.is_empty()),

            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".into())
                .parse()
                .unwrap_or(300),
            fetch_concurrency: env::var("FETCH_CONCURRENCY")
                .unwrap_or_else(|_| "8".into())
                .parse()
                .unwrap_or(8),
            refresh_interval_secs: env::var("REFRESH_INTERVAL_SECS")
                .unwrap_or_else(|_| "300".into())
                .parse()
                .unwrap_or(300),

            leaderboard_seed_enabled: env::var("LEADERBOARD_SEED_ENABLED")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
            leaderboard_min_account_value: env::var("LEADERBOARD_MIN_ACCOUNT_VALUE")
                .unwrap_or_else(|_| "1000000".into())
                .parse()
                .unwrap_or(Decimal::from(1_000_000)),
            leaderboard_max_wallets: env::var("LEADERBOARD_MAX_WALLETS")
                .unwrap_or_else(|_| "50".into())
                .parse()
                .unwrap_or(50),
        })
    }

    /// Returns true when an analytics API credential is configured.
    pub fn has_nansen_auth(&self) -> bool {
        self.nansen_api_key.is_some()
    }

    /// A config suitable for tests and offline demos: no credential, short
    /// cache, single-digit concurrency.
    pub fn offline_demo() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            nansen_api_key: None,
            cache_ttl_secs: 300,
            fetch_concurrency: 4,
            refresh_interval_secs: 300,
            leaderboard_seed_enabled: false,
            leaderboard_min_account_value: Decimal::from(1_000_000),
            leaderboard_max_wallets: 50,
        }
    }
}
