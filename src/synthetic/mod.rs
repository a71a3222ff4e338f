//! Deterministic synthetic data, used when the analytics API is unreachable
//! or no credentials are configured.
//!
//! The generator is seeded from a stable hash of the wallet address, so the
//! same address always yields the same position list. That determinism is a
//! requirement (reproducible demos and tests), not an implementation detail.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sha2::{Digest, Sha256};

use crate::models::{Direction, MarketAggregate, Position, WalletInfo};
use crate::roster::{token_price, TOKENS};

/// Stable 64-bit seed for a string key: leading bytes of its SHA-256 digest.
fn seed_for(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Generate a plausible open-position list for a wallet.
///
/// Mirrors the live payload shape: 1–5 positions, leverage 1–20x, 10–50% of
/// account value deployed across the list, entry within ±5% and mark within
/// ±2.5% of the reference price, liquidation at 1/leverage distance from
/// entry.
pub fn generate_positions(address: &str, account_value: Decimal) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed_for(address));

    let num_positions = rng.random_range(1..=5u32);
    let mut positions = Vec::with_capacity(num_positions as usize);

    for _ in 0..num_positions {
        let token = TOKENS[rng.random_range(0..TOKENS.len())];
        let direction = if rng.random_range(0..100u32) >= 45 {
            Direction::Long
        } else {
            Direction::Short
        };
        let leverage = Decimal::from(rng.random_range(1..=20u32));

        // 10–50% of account value, split across the generated positions
        let pct_bps = Decimal::from(rng.random_range(1_000..=5_000u32));
        let notional = account_value * pct_bps
            / dec!(10_000)
            / Decimal::from(num_positions);

        let base_price = token_price(token);
        let size = notional / base_price;

        let entry_var_bps = Decimal::from(rng.random_range(-500..=500i32));
        let entry_price = base_price * (Decimal::ONE + entry_var_bps / dec!(10_000));

        let mark_var_bps = Decimal::from(rng.random_range(-250..=250i32));
        let mark_price = base_price * (Decimal::ONE + mark_var_bps / dec!(10_000));

        let price_diff = match direction {
            Direction::Long => mark_price - entry_price,
            Direction::Short => entry_price - mark_price,
        };
        let unrealized_pnl = price_diff / entry_price * notional;

        let liq_distance = Decimal::ONE / leverage;
        let liquidation_price = match direction {
            Direction::Long => entry_price * (Decimal::ONE - liq_distance),
            Direction::Short => entry_price * (Decimal::ONE + liq_distance),
        };

        positions.push(Position {
            token: token.to_string(),
            direction,
            entry_price,
            mark_price,
            size: size.abs(),
            notional: notional.abs(),
            leverage,
            liquidation_price,
            margin_used: notional / leverage,
            unrealized_pnl,
        });
    }

    positions
}

/// Generate a market screener snapshot over the roster.
///
/// Each (wallet, token) pair deterministically lands long or short; longs
/// contribute 15% of the wallet's account value, shorts 10%. Sorted by
/// combined notional, largest first.
pub fn generate_market(roster: &[WalletInfo]) -> Vec<MarketAggregate> {
    let mut market: Vec<MarketAggregate> = TOKENS
        .iter()
        .take(6)
        .map(|token| {
            let mut long_notional = Decimal::ZERO;
            let mut short_notional = Decimal::ZERO;

            for w in roster {
                let mut rng = StdRng::seed_from_u64(seed_for(&format!("{}{}", w.address, token)));
                if rng.random::<bool>() {
                    long_notional += w.account_value * dec!(0.15);
                } else {
                    short_notional += w.account_value * dec!(0.10);
                }
            }

            MarketAggregate {
                token: token.to_string(),
                long_notional,
                short_notional,
                trader_count: (roster.len() as u32) * 2 / 5,
                unrealized_pnl_profit: long_notional * dec!(0.02),
                unrealized_pnl_loss: short_notional * dec!(0.015),
            }
        })
        .collect();

    market.sort_by(|a, b| b.total_notional().cmp(&a.total_notional()));
    market
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
