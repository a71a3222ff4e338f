use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Credit cost per endpoint, as billed by the analytics API.
pub fn endpoint_cost(endpoint: &str) -> u64 {
    match endpoint {
        "/api/v1/perp-leaderboard" => 5,
        "/api/v1/profiler/perp-positions" => 1,
        "/api/v1/tgm/perp-screener" => 1,
        _ => 1,
    }
}

/// Running totals of API usage and credit spend.
///
/// Shared across all calls made by one client; failed calls count toward the
/// call totals but are not billed.
#[derive(Debug, Default)]
pub struct UsageTracker {
    credits_used: AtomicU64,
    calls: AtomicU64,
    failures: AtomicU64,
    response_time_ms: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageSummary {
    pub total_credits_used: u64,
    pub total_calls: u64,
    pub successful_calls: u64,
    pub failed_calls: u64,
    pub avg_response_time_ms: u64,
}

impl UsageTracker {
    pub fn log_call(&self, endpoint: &str, success: bool, elapsed_ms: u64) {
        let cost = endpoint_cost(endpoint);

        self.calls.fetch_add(1, Ordering::Relaxed);
        self.response_time_ms.fetch_add(elapsed_ms, Ordering::Relaxed);

        if success {
            let total = self.credits_used.fetch_add(cost, Ordering::Relaxed) + cost;
            metrics::counter!("nansen_credits_used_total").increment(cost);
            tracing::info!(
                endpoint = endpoint,
                cost = cost,
                elapsed_ms = elapsed_ms,
                total_credits = total,
                "Analytics API call"
            );
        } else {
            self.failures.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("nansen_calls_failed_total").increment(1);
            tracing::warn!(
                endpoint = endpoint,
                elapsed_ms = elapsed_ms,
                "Analytics API call failed"
            );
        }
    }

    pub fn summary(&self) -> UsageSummary {
        let total_calls = self.calls.load(Ordering::Relaxed);
        let failed_calls = self.failures.load(Ordering::Relaxed);
        let response_time_ms = self.response_time_ms.load(Ordering::Relaxed);

        UsageSummary {
            total_credits_used: self.credits_used.load(Ordering::Relaxed),
            total_calls,
            successful_calls: total_calls - failed_calls,
            failed_calls,
            avg_response_time_ms: response_time_ms / total_calls.max(1),
        }
    }
}
