pub mod aggregate;
pub mod bias;
pub mod cohort;
pub mod summary;

pub use aggregate::{
    aggregate_by_token, total_position_value, total_unrealized_pnl, weighted_leverage,
};
pub use bias::{classify_bias, market_bias, Bias, MarketBias};
pub use cohort::{size_cohort, SizeCohort};
pub use summary::{summarize_wallet, WalletPositionSummary};
