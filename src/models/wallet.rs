use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity class a tracked wallet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    #[serde(rename = "retail")]
    Retail,
    #[serde(rename = "VCs")]
    Vc,
    #[serde(rename = "MM")]
    MarketMaker,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Retail => "retail",
            Entity::Vc => "VCs",
            Entity::MarketMaker => "MM",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference record for a tracked whale wallet.
///
/// Loaded once at startup (roster, optionally extended from the perp
/// leaderboard) and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub label: String,
    pub entity: Entity,
    /// Baseline account value in USD, used as equity for cohort tiering.
    pub account_value: Decimal,
    pub roi: Decimal,
    pub total_pnl: Decimal,
}
