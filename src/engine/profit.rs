//! Realized-profit evaluation over one asset ledger.

use crate::domain::Decimal;
use crate::engine::AssetLedger;
use tracing::debug;

/// Aggregate cash-flow delta: total sell USD value minus total buy USD
/// value. No FIFO/LIFO basis matching; `current_balance_usd` is never
/// consulted. Sell-only ledgers come out non-negative, buy-only ledgers
/// non-positive.
pub fn realized_profit(ledger: &AssetLedger) -> Decimal {
    let mut profit = Decimal::zero();
    for buy in &ledger.buys {
        profit -= buy.usd_value;
    }
    for sell in &ledger.sells {
        profit += sell.usd_value;
    }

    debug!(
        buys = ledger.buys.len(),
        sells = ledger.sells.len(),
        profit = %profit,
        "evaluated ledger"
    );
    profit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SwapKind, SwapRecord, TxHash};

    fn record(kind: SwapKind, usd: i64) -> SwapRecord {
        SwapRecord {
            kind,
            quote_symbol: "USDC".to_string(),
            traded_symbol: "TOKX".to_string(),
            tx_hash: TxHash::new("0x1".to_string()),
            traded_quantity: Decimal::from_i64(1),
            usd_value: Decimal::from_i64(usd),
        }
    }

    #[test]
    fn test_empty_ledger_has_zero_profit() {
        assert_eq!(realized_profit(&AssetLedger::default()), Decimal::zero());
    }

    #[test]
    fn test_sell_only_ledger_is_non_negative() {
        let ledger = AssetLedger {
            sells: vec![record(SwapKind::Sell, 120), record(SwapKind::Sell, 80)],
            ..Default::default()
        };
        assert_eq!(realized_profit(&ledger), Decimal::from_i64(200));
    }

    #[test]
    fn test_buy_only_ledger_is_non_positive() {
        let ledger = AssetLedger {
            buys: vec![record(SwapKind::Buy, 150)],
            ..Default::default()
        };
        assert_eq!(realized_profit(&ledger), Decimal::from_i64(-150));
    }

    #[test]
    fn test_mixed_ledger_nets_out() {
        let ledger = AssetLedger {
            buys: vec![record(SwapKind::Buy, 50)],
            sells: vec![record(SwapKind::Sell, 60)],
            ..Default::default()
        };
        assert_eq!(realized_profit(&ledger), Decimal::from_i64(10));
    }

    #[test]
    fn test_profit_ignores_current_balance() {
        let mut ledger = AssetLedger {
            buys: vec![record(SwapKind::Buy, 50)],
            sells: vec![record(SwapKind::Sell, 60)],
            ..Default::default()
        };
        ledger.current_balance_usd = Decimal::from_i64(1_000_000);
        assert_eq!(realized_profit(&ledger), Decimal::from_i64(10));
    }
}
