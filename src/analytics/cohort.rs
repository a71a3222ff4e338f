use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account-size tiers, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeCohort {
    #[serde(rename = "Fish")]
    Fish,
    #[serde(rename = "Shark")]
    Shark,
    #[serde(rename = "Whale")]
    Whale,
    #[serde(rename = "Kraken")]
    Kraken,
}

impl SizeCohort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCohort::Fish => "Fish",
            SizeCohort::Shark => "Shark",
            SizeCohort::Whale => "Whale",
            SizeCohort::Kraken => "Kraken",
        }
    }
}

impl fmt::Display for SizeCohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier a wallet by account equity.
///
/// Total function: every equity value (including zero and negative) maps to a
/// tier. Boundaries are inclusive on the larger tier.
pub fn size_cohort(equity: Decimal) -> SizeCohort {
    if equity >= Decimal::from(50_000_000) {
        SizeCohort::Kraken
    } else if equity >= Decimal::from(10_000_000) {
        SizeCohort::Whale
    } else if equity >= Decimal::from(1_000_000) {
        SizeCohort::Shark
    } else {
        SizeCohort::Fish
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
