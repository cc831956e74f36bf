//! Pure computation engine: swap classification, ledger accumulation,
//! profit evaluation, judgment labeling, and feed composition.

use crate::domain::{Address, AssetId, Decimal, SwapRecord};
use std::collections::HashMap;

pub mod classifier;
pub mod composer;
pub mod judgment;
pub mod ledger;
pub mod profit;

pub use classifier::{classify_swap, ClassifiedSwap};
pub use composer::{compose_feed, compose_feed_at};
pub use judgment::{judge_ledger, judge_profit};
pub use ledger::accumulate_owner;
pub use profit::realized_profit;

/// Accumulated buy/sell history plus current balance for one
/// (owner, traded-asset) pair. Built in a single aggregation pass and
/// never persisted across invocations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetLedger {
    /// Buys in original transaction order.
    pub buys: Vec<SwapRecord>,
    /// Sells in original transaction order.
    pub sells: Vec<SwapRecord>,
    /// Latest known USD value of the holding, sourced once from the
    /// snapshot's balance map. Never recomputed from the buy/sell lists.
    pub current_balance_usd: Decimal,
}

impl AssetLedger {
    /// A fresh ledger carrying the snapshot-reported balance.
    pub fn with_balance(current_balance_usd: Decimal) -> Self {
        AssetLedger {
            buys: Vec::new(),
            sells: Vec::new(),
            current_balance_usd,
        }
    }

    /// True when the owner no longer holds any of this asset.
    pub fn fully_exited(&self) -> bool {
        self.current_balance_usd.is_zero()
    }
}

/// Ledgers for a single owner, keyed by traded asset.
pub type OwnerLedgers = HashMap<AssetId, AssetLedger>;

/// Ledgers for all owners.
pub type BuySellMap = HashMap<Address, OwnerLedgers>;
