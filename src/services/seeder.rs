use rust_decimal::Decimal;

use crate::config::AppConfig;
use crate::models::{Entity, WalletInfo};
use crate::nansen::{ApiLeaderboardEntry, NansenClient};

/// One-shot startup task: extend the static roster with top wallets from the
/// perp leaderboard. Entirely optional — a failed fetch leaves the static
/// roster untouched.
pub async fn seed_roster_from_leaderboard(
    client: &NansenClient,
    config: &AppConfig,
    roster: &mut Vec<WalletInfo>,
) -> anyhow::Result<usize> {
    let entries = client
        .perp_leaderboard(config.leaderboard_min_account_value, 50)
        .await
        .map_err(|e| anyhow::anyhow!("failed to fetch leaderboard: {e}"))?;

    let added = merge_leaderboard_entries(roster, entries, config.leaderboard_max_wallets);

    tracing::info!(
        added = added,
        roster = roster.len(),
        "Seeded roster from perp leaderboard"
    );

    Ok(added)
}

/// Merge leaderboard entries into the roster: skip blank or duplicate
/// addresses and zero-value accounts, cap the number of additions.
pub fn merge_leaderboard_entries(
    roster: &mut Vec<WalletInfo>,
    entries: Vec<ApiLeaderboardEntry>,
    max_additions: usize,
) -> usize {
    let mut added = 0usize;

    for entry in entries {
        if added >= max_additions {
            break;
        }

        let Some(address) = entry.address.filter(|a| !a.is_empty()) else {
            continue;
        };
        if roster
            .iter()
            .any(|w| w.address.eq_ignore_ascii_case(&address))
        {
            continue;
        }

        let account_value = entry.account_value.unwrap_or(Decimal::ZERO);
        if account_value <= Decimal::ZERO {
            continue;
        }

        let label = entry
            .label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| format!("Leaderboard [{}]", &address[..8.min(address.len())]));

        roster.push(WalletInfo {
            address,
            label,
            // the leaderboard carries no entity tag
            entity: Entity::Retail,
            account_value,
            roi: entry.roi.unwrap_or(Decimal::ZERO),
            total_pnl: entry.total_pnl.unwrap_or(Decimal::ZERO),
        });
        added += 1;
    }

    added
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
