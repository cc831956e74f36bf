//! Swap classifier: decides whether a transaction is a recognizable
//! two-leg swap and which leg is the quote side.

use crate::config::QuotePolicy;
use crate::domain::{ActivityType, AssetActivity, AssetChange, AssetId, SwapKind, SwapRecord};
use tracing::debug;

/// A classified swap: the traded asset's grouping key plus the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSwap {
    pub traded_asset: AssetId,
    pub record: SwapRecord,
}

/// Classify one transaction.
///
/// Produces a record only for a `Swap` with exactly two token-transfer
/// legs where exactly one leg is a recognized quote asset. Everything
/// else is skipped silently: refund and multi-leg swaps are out of
/// policy, not errors.
pub fn classify_swap(activity: &AssetActivity, quotes: &QuotePolicy) -> Option<ClassifiedSwap> {
    if activity.activity_type != ActivityType::Swap {
        return None;
    }

    let transfers: Vec<&AssetChange> = activity
        .asset_changes
        .iter()
        .filter(|change| change.is_token_transfer())
        .collect();
    if transfers.len() != 2 {
        debug!(hash = %activity.hash, legs = transfers.len(), "skipping swap: not a simple two-leg transfer");
        return None;
    }

    let first_is_quote = quotes.is_quote(transfers[0].asset_symbol.as_deref());
    let second_is_quote = quotes.is_quote(transfers[1].asset_symbol.as_deref());
    let (quote, traded) = match (first_is_quote, second_is_quote) {
        (true, false) => (transfers[0], transfers[1]),
        (false, true) => (transfers[1], transfers[0]),
        _ => {
            debug!(hash = %activity.hash, "skipping swap: legs are not a quote/traded pair");
            return None;
        }
    };

    let kind = match quote.direction {
        // Quote asset leaving the wallet pays for the traded asset.
        crate::domain::Direction::Out => SwapKind::Buy,
        crate::domain::Direction::In => SwapKind::Sell,
    };

    let record = SwapRecord {
        kind,
        quote_symbol: quote.asset_symbol.clone().unwrap_or_default(),
        traded_symbol: traded.asset_symbol.clone().unwrap_or_default(),
        tx_hash: activity.hash.clone(),
        traded_quantity: traded.quantity_decimal(),
        usd_value: quote.usd_value(),
    };

    Some(ClassifiedSwap {
        traded_asset: traded.asset_address.clone(),
        record,
    })
}
