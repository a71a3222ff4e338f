use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{Direction, MarketAggregate, Position};

/// Notional-weighted average leverage over a position list.
///
/// Returns 0 for an empty list or zero total notional.
pub fn weighted_leverage(positions: &[Position]) -> Decimal {
    let total_notional: Decimal = positions.iter().map(|p| p.notional.abs()).sum();
    if total_notional.is_zero() {
        return Decimal::ZERO;
    }

    let weighted_sum: Decimal = positions
        .iter()
        .map(|p| p.leverage * p.notional.abs())
        .sum();

    weighted_sum / total_notional
}

/// Signed sum of unrealized PnL over all positions.
pub fn total_unrealized_pnl(positions: &[Position]) -> Decimal {
    positions.iter().map(|p| p.unrealized_pnl).sum()
}

/// Sum of absolute notional over all positions.
pub fn total_position_value(positions: &[Position]) -> Decimal {
    positions.iter().map(|p| p.notional.abs()).sum()
}

/// Group positions across wallets by token.
///
/// Each item of `wallets` is one wallet's full position list; a wallet counts
/// once toward a token's trader count no matter how many positions it holds in
/// it. Unrealized PnL is split by sign, with the loss bucket reported as a
/// positive value. Output is sorted by combined notional, largest first.
pub fn aggregate_by_token<'a, I>(wallets: I) -> Vec<MarketAggregate>
where
    I: IntoIterator<Item = &'a [Position]>,
{
    let mut by_token: BTreeMap<String, MarketAggregate> = BTreeMap::new();

    for positions in wallets {
        let mut counted: Vec<&str> = Vec::new();

        for p in positions {
            let agg = by_token
                .entry(p.token.clone())
                .or_insert_with(|| MarketAggregate {
                    token: p.token.clone(),
                    long_notional: Decimal::ZERO,
                    short_notional: Decimal::ZERO,
                    trader_count: 0,
                    unrealized_pnl_profit: Decimal::ZERO,
                    unrealized_pnl_loss: Decimal::ZERO,
                });

            match p.direction {
                Direction::Long => agg.long_notional += p.notional.abs(),
                Direction::Short => agg.short_notional += p.notional.abs(),
            }

            if p.unrealized_pnl >= Decimal::ZERO {
                agg.unrealized_pnl_profit += p.unrealized_pnl;
            } else {
                agg.unrealized_pnl_loss += -p.unrealized_pnl;
            }

            if !counted.iter().any(|t| *t == p.token) {
                agg.trader_count += 1;
                counted.push(&p.token);
            }
        }
    }

    let mut aggregates: Vec<MarketAggregate> = by_token.into_values().collect();
    aggregates.sort_by(|a, b| b.total_notional().cmp(&a.total_notional()));
    aggregates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_position(
        token: &str,
        direction: Direction,
        notional: Decimal,
        leverage: Decimal,
        unrealized_pnl: Decimal,
    ) -> Position {
        Position {
            token: token.into(),
            direction,
            entry_price: dec!(100),
            mark_price: dec!(100),
            size: notional / dec!(100),
            notional,
            leverage,
            liquidation_price: dec!(80),
            margin_used: notional / leverage.max(Decimal::ONE),
            unrealized_pnl,
        }
    }

    #[test]
    fn test_weighted_leverage_empty_is_zero() {
        assert_eq!(weighted_leverage(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_weighted_leverage_zero_notional_is_zero() {
        let positions = vec![make_position(
            "ETH",
            Direction::Long,
            Decimal::ZERO,
            dec!(10),
            Decimal::ZERO,
        )];
        assert_eq!(weighted_leverage(&positions), Decimal::ZERO);
    }

    #[test]
    fn test_single_position_leverage_is_its_own() {
        // Weighting must not depend on the notional when there is one position
        for notional in [dec!(1), dec!(50_000), dec!(12_345_678.90)] {
            let positions = vec![make_position(
                "BTC",
                Direction::Long,
                notional,
                dec!(7),
                Decimal::ZERO,
            )];
            assert_eq!(weighted_leverage(&positions), dec!(7));
        }
    }

    #[test]
    fn test_weighted_leverage_weights_by_notional() {
        let positions = vec![
            make_position("BTC", Direction::Long, dec!(300), dec!(10), Decimal::ZERO),
            make_position("ETH", Direction::Short, dec!(100), dec!(2), Decimal::ZERO),
        ];
        // (10*300 + 2*100) / 400 = 8
        assert_eq!(weighted_leverage(&positions), dec!(8));
    }

    #[test]
    fn test_pnl_sum_is_signed() {
        let positions = vec![
            make_position("BTC", Direction::Long, dec!(100), dec!(1), dec!(250)),
            make_position("ETH", Direction::Short, dec!(100), dec!(1), dec!(-400)),
        ];
        assert_eq!(total_unrealized_pnl(&positions), dec!(-150));
        assert_eq!(total_unrealized_pnl(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_position_value_is_absolute() {
        let positions = vec![
            make_position("BTC", Direction::Long, dec!(100), dec!(1), Decimal::ZERO),
            make_position("ETH", Direction::Short, dec!(-40), dec!(1), Decimal::ZERO),
        ];
        assert_eq!(total_position_value(&positions), dec!(140));
        assert_eq!(total_position_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_single_wallet_single_token_aggregate() {
        let wallet = vec![make_position(
            "SOL",
            Direction::Long,
            dec!(5_000),
            dec!(3),
            dec!(120),
        )];
        let aggregates = aggregate_by_token([wallet.as_slice()]);

        assert_eq!(aggregates.len(), 1);
        let agg = &aggregates[0];
        assert_eq!(agg.token, "SOL");
        assert_eq!(agg.long_notional, dec!(5_000));
        assert_eq!(agg.short_notional, Decimal::ZERO);
        assert_eq!(agg.trader_count, 1);
        assert_eq!(agg.unrealized_pnl_profit, dec!(120));
        assert_eq!(agg.unrealized_pnl_loss, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_counts_wallets_not_positions() {
        // One wallet with two BTC positions, another with one
        let wallet_a = vec![
            make_position("BTC", Direction::Long, dec!(100), dec!(2), dec!(-10)),
            make_position("BTC", Direction::Short, dec!(200), dec!(2), dec!(30)),
        ];
        let wallet_b = vec![make_position(
            "BTC",
            Direction::Long,
            dec!(400),
            dec!(2),
            dec!(5),
        )];

        let aggregates = aggregate_by_token([wallet_a.as_slice(), wallet_b.as_slice()]);

        assert_eq!(aggregates.len(), 1);
        let agg = &aggregates[0];
        assert_eq!(agg.trader_count, 2);
        assert_eq!(agg.long_notional, dec!(500));
        assert_eq!(agg.short_notional, dec!(200));
        assert_eq!(agg.unrealized_pnl_profit, dec!(35));
        assert_eq!(agg.unrealized_pnl_loss, dec!(10));
    }

    #[test]
    fn test_aggregates_sorted_by_total_notional() {
        let wallet = vec![
            make_position("ETH", Direction::Long, dec!(100), dec!(1), Decimal::ZERO),
            make_position("BTC", Direction::Long, dec!(900), dec!(1), Decimal::ZERO),
            make_position("SOL", Direction::Short, dec!(500), dec!(1), Decimal::ZERO),
        ];
        let aggregates = aggregate_by_token([wallet.as_slice()]);

        let tokens: Vec<&str> = aggregates.iter().map(|a| a.token.as_str()).collect();
        assert_eq!(tokens, vec!["BTC", "SOL", "ETH"]);
    }
}
