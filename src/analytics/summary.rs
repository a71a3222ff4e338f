use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DataSource, Entity, Position, WalletInfo};

use super::bias::{classify_bias, Bias};
use super::cohort::{size_cohort, SizeCohort};
use super::{total_position_value, total_unrealized_pnl, weighted_leverage};

/// Derived per-wallet view, recomputed in full from the current position list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletPositionSummary {
    pub address: String,
    pub label: String,
    pub entity: Entity,
    pub equity: Decimal,
    pub bias: Bias,
    pub position_value: Decimal,
    pub weighted_leverage: Decimal,
    pub unrealized_pnl: Decimal,
    pub cohort: SizeCohort,
    pub position_count: usize,
    pub source: DataSource,
}

/// Build the summary row for one wallet from its roster record and freshly
/// fetched positions.
pub fn summarize_wallet(
    info: &WalletInfo,
    positions: &[Position],
    source: DataSource,
) -> WalletPositionSummary {
    WalletPositionSummary {
        address: info.address.clone(),
        label: info.label.clone(),
        entity: info.entity,
        equity: info.account_value,
        bias: classify_bias(positions),
        position_value: total_position_value(positions),
        weighted_leverage: weighted_leverage(positions),
        unrealized_pnl: total_unrealized_pnl(positions),
        cohort: size_cohort(info.account_value),
        position_count: positions.len(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
