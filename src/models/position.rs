use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Direction;

/// One open perp position for a wallet.
///
/// Produced fresh on every fetch; a wallet's position list is replaced
/// wholesale, never diffed against the previous fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub token: String,
    pub direction: Direction,
    pub entry_price: Decimal,
    pub mark_price: Decimal,
    pub size: Decimal,
    /// USD value of the exposure (size × price).
    pub notional: Decimal,
    pub leverage: Decimal,
    pub liquidation_price: Decimal,
    pub margin_used: Decimal,
    pub unrealized_pnl: Decimal,
}
