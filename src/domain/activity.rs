//! Raw portfolio snapshot types as delivered by the remote portfolio query.
//!
//! These mirror the wire payload: camelCase fields, nullable symbols and
//! addresses, string-typed quantities. Normalization into engine types
//! happens in the classifier, not here.

use crate::domain::{Address, AssetId, Decimal, Direction, TimeMs, TxHash};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One friend's fetched portfolio: activity history plus current holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Address of the account this snapshot belongs to.
    pub owner_address: Address,
    /// Transaction-level records, in the order the query returned them.
    #[serde(default)]
    pub asset_activities: Vec<AssetActivity>,
    /// Latest known USD value of holdings, keyed by asset.
    #[serde(default)]
    pub balances: HashMap<String, Decimal>,
}

impl PortfolioSnapshot {
    /// Current USD balance for an asset, zero when the query reported none.
    pub fn balance_for(&self, asset: &AssetId) -> Decimal {
        self.balances
            .get(asset.as_key())
            .copied()
            .unwrap_or_else(Decimal::zero)
    }
}

/// A single transaction in an account's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetActivity {
    pub hash: TxHash,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Transaction time as reported by the chain indexer.
    pub timestamp: TimeMs,
    #[serde(default)]
    pub asset_changes: Vec<AssetChange>,
}

/// Transaction type reported by the indexer. Only `Swap` is consumed by the
/// classification engine; everything else passes through as plain activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Approve,
    Borrow,
    Claim,
    Mint,
    Receive,
    Repay,
    Send,
    Stake,
    Swap,
    Unstake,
    Withdraw,
    #[serde(other)]
    Unknown,
}

/// Structural kind of an asset-change leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChangeKind {
    #[default]
    TokenTransfer,
    NftTransfer,
    #[serde(other)]
    Other,
}

/// One leg of a transfer within a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetChange {
    #[serde(rename = "__typename", default)]
    pub kind: ChangeKind,
    /// Token symbol; absent for unnamed tokens.
    #[serde(default)]
    pub asset_symbol: Option<String>,
    /// Token contract address; `Unknown` when the payload carried null.
    #[serde(default)]
    pub asset_address: AssetId,
    pub direction: Direction,
    /// Quantity as the indexer reports it: a decimal string.
    #[serde(default)]
    pub quantity: Option<String>,
    /// USD value of this leg at transaction time, when known.
    #[serde(default)]
    pub transacted_value_usd: Option<Decimal>,
}

impl AssetChange {
    /// True when this leg is a fungible token transfer.
    pub fn is_token_transfer(&self) -> bool {
        self.kind == ChangeKind::TokenTransfer
    }

    /// Quantity coerced to a number; missing or non-numeric becomes zero.
    pub fn quantity_decimal(&self) -> Decimal {
        self.quantity
            .as_deref()
            .and_then(|q| Decimal::from_str_canonical(q).ok())
            .unwrap_or_else(Decimal::zero)
    }

    /// USD value of this leg, zero when the indexer reported none.
    pub fn usd_value(&self) -> Decimal {
        self.transacted_value_usd.unwrap_or_else(Decimal::zero)
    }
}
