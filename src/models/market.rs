use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-token aggregate across all tracked wallets.
///
/// Either fetched from the market screener endpoint or recomputed from the
/// loaded position set; recomputed in full on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAggregate {
    pub token: String,
    pub long_notional: Decimal,
    pub short_notional: Decimal,
    pub trader_count: u32,
    /// Summed unrealized PnL of positions currently in profit.
    pub unrealized_pnl_profit: Decimal,
    /// Summed losses, reported as a positive value.
    pub unrealized_pnl_loss: Decimal,
}

impl MarketAggregate {
    /// Combined long + short exposure, the screener's default sort key.
    pub fn total_notional(&self) -> Decimal {
        self.long_notional + self.short_notional
    }
}
