//! Ledger accumulator: folds classified swaps into per-asset buy/sell
//! ledgers for a single owner.

use crate::config::QuotePolicy;
use crate::domain::{PortfolioSnapshot, SwapKind};
use crate::engine::classifier::classify_swap;
use crate::engine::{AssetLedger, OwnerLedgers};

/// Fold one owner's snapshot into per-asset ledgers.
///
/// Activities are visited in the order the query returned them, so each
/// ledger's buy/sell lists preserve original transaction order. The
/// balance is sourced once, on first encounter of the asset, from the
/// snapshot's balance map (zero when absent). Pure: re-running on the
/// same snapshot yields the same ledgers.
pub fn accumulate_owner(snapshot: &PortfolioSnapshot, quotes: &QuotePolicy) -> OwnerLedgers {
    let mut ledgers = OwnerLedgers::new();

    for activity in &snapshot.asset_activities {
        let Some(classified) = classify_swap(activity, quotes) else {
            continue;
        };

        let ledger = ledgers
            .entry(classified.traded_asset.clone())
            .or_insert_with(|| {
                AssetLedger::with_balance(snapshot.balance_for(&classified.traded_asset))
            });

        match classified.record.kind {
            SwapKind::Buy => ledger.buys.push(classified.record),
            SwapKind::Sell => ledger.sells.push(classified.record),
        }
    }

    ledgers
}
