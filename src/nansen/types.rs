use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, MarketAggregate, Position};

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Every endpoint wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
}

// ---------------------------------------------------------------------------
// Per-wallet positions (profiler/perp-positions)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPosition {
    pub token_symbol: Option<String>,
    pub side: Option<String>,
    pub entry_price: Option<Decimal>,
    pub mark_price: Option<Decimal>,
    pub size: Option<Decimal>,
    pub position_value_usd: Option<Decimal>,
    pub leverage: Option<Decimal>,
    pub liquidation_price: Option<Decimal>,
    pub margin_used: Option<Decimal>,
    pub unrealized_pnl: Option<Decimal>,
}

impl ApiPosition {
    /// Convert an API record into a domain position.
    ///
    /// Records missing a token symbol or a parseable side are dropped, the
    /// rest default to zero the way the upstream omits empty numerics.
    pub fn into_position(self) -> Option<Position> {
        let token = self.token_symbol?;
        let direction = Direction::from_api_str(self.side.as_deref()?)?;

        Some(Position {
            token,
            direction,
            entry_price: self.entry_price.unwrap_or(Decimal::ZERO),
            mark_price: self.mark_price.unwrap_or(Decimal::ZERO),
            size: self.size.unwrap_or(Decimal::ZERO).abs(),
            notional: self.position_value_usd.unwrap_or(Decimal::ZERO).abs(),
            leverage: self.leverage.unwrap_or(Decimal::ONE),
            liquidation_price: self.liquidation_price.unwrap_or(Decimal::ZERO),
            margin_used: self.margin_used.unwrap_or(Decimal::ZERO),
            unrealized_pnl: self.unrealized_pnl.unwrap_or(Decimal::ZERO),
        })
    }
}

// ---------------------------------------------------------------------------
// Market screener (tgm/perp-screener)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiScreenerRow {
    pub token_symbol: Option<String>,
    pub long_position_value_usd: Option<Decimal>,
    pub short_position_value_usd: Option<Decimal>,
    pub trader_count: Option<u32>,
    pub unrealized_pnl_profit: Option<Decimal>,
    pub unrealized_pnl_loss: Option<Decimal>,
}

impl ApiScreenerRow {
    pub fn into_aggregate(self) -> Option<MarketAggregate> {
        let token = self.token_symbol?;

        Some(MarketAggregate {
            token,
            long_notional: self.long_position_value_usd.unwrap_or(Decimal::ZERO).abs(),
            short_notional: self.short_position_value_usd.unwrap_or(Decimal::ZERO).abs(),
            trader_count: self.trader_count.unwrap_or(0),
            unrealized_pnl_profit: self.unrealized_pnl_profit.unwrap_or(Decimal::ZERO),
            // the upstream reports losses negative; the aggregate keeps them
            // positive-valued
            unrealized_pnl_loss: self.unrealized_pnl_loss.unwrap_or(Decimal::ZERO).abs(),
        })
    }
}

// ---------------------------------------------------------------------------
// Leaderboard (perp-leaderboard)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiLeaderboardEntry {
    pub address: Option<String>,
    pub label: Option<String>,
    pub account_value: Option<Decimal>,
    pub roi: Option<Decimal>,
    pub total_pnl: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
