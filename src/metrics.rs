use std::sync::OnceLock;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one recorder can exist per process, so repeat calls (tests build
/// several app states) hand back the same handle.
pub fn init_metrics() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear even before the first
            // increment.
            counter!("wallet_fetches_total").absolute(0);
            counter!("wallet_fetch_failures_total").absolute(0);
            counter!("synthetic_fallbacks_total").absolute(0);
            counter!("refreshes_total").absolute(0);
            counter!("nansen_credits_used_total").absolute(0);
            counter!("nansen_calls_failed_total").absolute(0);

            // Pre-register gauges at zero.
            gauge!("wallets_loaded").set(0.0);
            gauge!("tracked_wallets").set(0.0);

            // Histogram is lazily created on first record; force creation.
            histogram!("refresh_duration_seconds").record(0.0);

            handle
        })
        .clone()
}
