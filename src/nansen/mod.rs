pub mod client;
pub mod types;
pub mod usage;

pub use client::{NansenClient, NansenClientError};
pub use types::{ApiLeaderboardEntry, ApiPosition, ApiScreenerRow};
pub use usage::{UsageSummary, UsageTracker};
