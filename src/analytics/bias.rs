use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Position};

/// Directional bias labels for a single wallet, ordered least to most bullish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bias {
    #[serde(rename = "Extremely Bearish")]
    ExtremelyBearish,
    #[serde(rename = "Bearish")]
    Bearish,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Bullish")]
    Bullish,
    #[serde(rename = "Extremely Bullish")]
    ExtremelyBullish,
}

impl Bias {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::ExtremelyBearish => "Extremely Bearish",
            Bias::Bearish => "Bearish",
            Bias::Neutral => "Neutral",
            Bias::Bullish => "Bullish",
            Bias::ExtremelyBullish => "Extremely Bullish",
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market-level bias labels, ordered least to most bullish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketBias {
    #[serde(rename = "Very Bearish")]
    VeryBearish,
    #[serde(rename = "Bearish")]
    Bearish,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Bullish")]
    Bullish,
    #[serde(rename = "Very Bullish")]
    VeryBullish,
}

impl MarketBias {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketBias::VeryBearish => "Very Bearish",
            MarketBias::Bearish => "Bearish",
            MarketBias::Neutral => "Neutral",
            MarketBias::Bullish => "Bullish",
            MarketBias::VeryBullish => "Very Bullish",
        }
    }
}

impl fmt::Display for MarketBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a wallet's directional bias from its open positions.
///
/// long/short notionals are summed as absolute values; the label comes from
/// long / (long + short). Zero total exposure is Neutral. Boundaries belong to
/// the more extreme bucket: `>=` on the bullish cutoffs, `<=` on the bearish
/// ones.
pub fn classify_bias(positions: &[Position]) -> Bias {
    let mut long_notional = Decimal::ZERO;
    let mut short_notional = Decimal::ZERO;

    for p in positions {
        match p.direction {
            Direction::Long => long_notional += p.notional.abs(),
            Direction::Short => short_notional += p.notional.abs(),
        }
    }

    let total = long_notional + short_notional;
    if total.is_zero() {
        return Bias::Neutral;
    }

    let long_ratio = long_notional / total;

    if long_ratio >= Decimal::new(8, 1) {
        Bias::ExtremelyBullish
    } else if long_ratio >= Decimal::new(6, 1) {
        Bias::Bullish
    } else if long_ratio <= Decimal::new(2, 1) {
        Bias::ExtremelyBearish
    } else if long_ratio <= Decimal::new(4, 1) {
        Bias::Bearish
    } else {
        Bias::Neutral
    }
}

/// Market-level bias from summed long/short notionals.
///
/// Same boundary convention as [`classify_bias`], with cutoffs at
/// 0.3 / 0.45 / 0.55 / 0.7. Zero total exposure is Neutral.
pub fn market_bias(long_notional: Decimal, short_notional: Decimal) -> MarketBias {
    let total = long_notional + short_notional;
    if total.is_zero() {
        return MarketBias::Neutral;
    }

    let long_ratio = long_notional / total;

    if long_ratio >= Decimal::new(7, 1) {
        MarketBias::VeryBullish
    } else if long_ratio >= Decimal::new(55, 2) {
        MarketBias::Bullish
    } else if long_ratio <= Decimal::new(3, 1) {
        MarketBias::VeryBearish
    } else if long_ratio <= Decimal::new(45, 2) {
        MarketBias::Bearish
    } else {
        MarketBias::Neutral
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_position(direction: Direction, notional: Decimal) -> Position {
        Position {
            token: "BTC".into(),
            direction,
            entry_price: dec!(95000),
            mark_price: dec!(95000),
            size: notional / dec!(95000),
            notional,
            leverage: dec!(5),
            liquidation_price: dec!(76000),
            margin_used: notional / dec!(5),
            unrealized_pnl: Decimal::ZERO,
        }
    }

    #[test]
    fn test_empty_positions_are_neutral() {
        assert_eq!(classify_bias(&[]), Bias::Neutral);
    }

    #[test]
    fn test_zero_notional_is_neutral() {
        let positions = vec![
            make_position(Direction::Long, Decimal::ZERO),
            make_position(Direction::Short, Decimal::ZERO),
        ];
        assert_eq!(classify_bias(&positions), Bias::Neutral);
    }

    #[test]
    fn test_boundary_ratio_is_extremely_bullish() {
        // 800 long / 200 short → ratio exactly 0.8, boundary belongs to the
        // more extreme bucket
        let positions = vec![
            make_position(Direction::Long, dec!(800)),
            make_position(Direction::Short, dec!(200)),
        ];
        assert_eq!(classify_bias(&positions), Bias::ExtremelyBullish);
    }

    #[test]
    fn test_all_short_is_extremely_bearish() {
        let positions = vec![make_position(Direction::Short, dec!(1_000_000))];
        assert_eq!(classify_bias(&positions), Bias::ExtremelyBearish);
    }

    #[test]
    fn test_short_notional_sign_is_ignored() {
        // Some upstreams report short notionals negative; |notional| is what
        // counts
        let positions = vec![
            make_position(Direction::Long, dec!(500)),
            make_position(Direction::Short, dec!(-500)),
        ];
        assert_eq!(classify_bias(&positions), Bias::Neutral);
    }

    #[test]
    fn test_bias_is_monotonic_in_long_ratio() {
        // Sweep the long ratio 0.00 .. 1.00; labels must never become less
        // bullish as the ratio increases
        let mut previous = Bias::ExtremelyBearish;
        for pct in 0..=100u32 {
            let long = Decimal::from(pct);
            let short = Decimal::from(100 - pct);
            let positions = vec![
                make_position(Direction::Long, long),
                make_position(Direction::Short, short),
            ];
            let bias = classify_bias(&positions);
            assert!(
                bias >= previous,
                "ratio {pct}% produced {bias}, less bullish than {previous}"
            );
            previous = bias;
        }
        assert_eq!(previous, Bias::ExtremelyBullish);
    }

    #[test]
    fn test_market_bias_thresholds() {
        assert_eq!(market_bias(dec!(70), dec!(30)), MarketBias::VeryBullish);
        assert_eq!(market_bias(dec!(55), dec!(45)), MarketBias::Bullish);
        assert_eq!(market_bias(dec!(50), dec!(50)), MarketBias::Neutral);
        assert_eq!(market_bias(dec!(45), dec!(55)), MarketBias::Bearish);
        assert_eq!(market_bias(dec!(30), dec!(70)), MarketBias::VeryBearish);
    }

    #[test]
    fn test_market_bias_zero_total_is_neutral() {
        assert_eq!(
            market_bias(Decimal::ZERO, Decimal::ZERO),
            MarketBias::Neutral
        );
    }
}
