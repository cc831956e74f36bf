//! Derived swap record produced by the classifier.

use crate::domain::{Decimal, TxHash};
use serde::{Deserialize, Serialize};

/// Which side of the trade the owner took, inferred from the quote leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapKind {
    /// Quote asset left the wallet: the owner bought the traded asset.
    Buy,
    /// Quote asset entered the wallet: the owner sold the traded asset.
    Sell,
}

impl std::fmt::Display for SwapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapKind::Buy => write!(f, "buy"),
            SwapKind::Sell => write!(f, "sell"),
        }
    }
}

/// A classified two-leg swap. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub kind: SwapKind,
    /// Symbol of the stable/native reference leg.
    pub quote_symbol: String,
    /// Symbol of the asset whose position is being tracked.
    pub traded_symbol: String,
    pub tx_hash: TxHash,
    /// Quantity of the traded asset that moved.
    pub traded_quantity: Decimal,
    /// USD value of the quote leg at transaction time.
    pub usd_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_kind_serialization() {
        assert_eq!(serde_json::to_string(&SwapKind::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&SwapKind::Sell).unwrap(), "\"sell\"");
    }

    #[test]
    fn test_swap_record_roundtrip() {
        let record = SwapRecord {
            kind: SwapKind::Buy,
            quote_symbol: "USDC".to_string(),
            traded_symbol: "TOKX".to_string(),
            tx_hash: TxHash::new("0x1".to_string()),
            traded_quantity: Decimal::from_i64(10),
            usd_value: Decimal::from_i64(150),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SwapRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
