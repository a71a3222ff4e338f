use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::models::{DataSource, MarketAggregate, Position};

/// One wallet's cached fetch outcome.
#[derive(Debug)]
pub struct PositionsEntry {
    pub positions: Vec<Position>,
    pub source: DataSource,
}

/// The cached market screener outcome.
#[derive(Debug)]
pub struct MarketEntry {
    pub aggregates: Vec<MarketAggregate>,
    pub source: DataSource,
}

/// TTL cache in front of the analytics API.
///
/// Wallet entries are keyed by address; the market screener has a single
/// entry. `get_with` coalesces concurrent loads of the same key, so a refresh
/// cycle never issues duplicate requests for one wallet inside the freshness
/// window.
#[derive(Clone)]
pub struct FetchCache {
    positions: Cache<String, Arc<PositionsEntry>>,
    market: Cache<(), Arc<MarketEntry>>,
}

impl FetchCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            positions: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
            market: Cache::builder()
                .max_capacity(1)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Cached positions for `address`, loading via `init` on a miss.
    pub async fn wallet_positions<F, Fut>(&self, address: &str, init: F) -> Arc<PositionsEntry>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PositionsEntry>,
    {
        self.positions
            .get_with(address.to_string(), async move { Arc::new(init().await) })
            .await
    }

    /// Cached market screener, loading via `init` on a miss.
    pub async fn market<F, Fut>(&self, init: F) -> Arc<MarketEntry>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MarketEntry>,
    {
        self.market
            .get_with((), async move { Arc::new(init().await) })
            .await
    }

    /// Drop everything; the next refresh re-fetches from the upstream.
    pub fn invalidate_all(&self) {
        self.positions.invalidate_all();
        self.market.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.positions.entry_count() + self.market.entry_count()
    }
}
