//! Judgment labeler: maps a profit figure to a qualitative label.

use crate::config::JudgmentPolicy;
use crate::domain::{Decimal, JudgmentLabel};
use crate::engine::{profit::realized_profit, AssetLedger};

/// Label a profit figure. Both thresholds are strict: a profit exactly at
/// a threshold produces no label.
///
/// `fully_exited` marks a position the owner has completely left
/// (`current_balance_usd == 0`). It is computed and passed through for
/// parity with the source data but does not influence the current
/// emission policy, which only ever produces `GotRugged` and `Gains`.
pub fn judge_profit(
    profit: Decimal,
    _fully_exited: bool,
    policy: &JudgmentPolicy,
) -> Option<JudgmentLabel> {
    if profit < policy.rug_threshold {
        Some(JudgmentLabel::GotRugged)
    } else if profit > policy.gains_threshold {
        Some(JudgmentLabel::Gains)
    } else {
        None
    }
}

/// Evaluate and label one ledger.
pub fn judge_ledger(ledger: &AssetLedger, policy: &JudgmentPolicy) -> Option<JudgmentLabel> {
    judge_profit(realized_profit(ledger), ledger.fully_exited(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judge(profit: &str) -> Option<JudgmentLabel> {
        judge_profit(
            Decimal::from_str_canonical(profit).unwrap(),
            false,
            &JudgmentPolicy::default(),
        )
    }

    #[test]
    fn test_rug_below_threshold() {
        assert_eq!(judge("-100.01"), Some(JudgmentLabel::GotRugged));
        assert_eq!(judge("-150"), Some(JudgmentLabel::GotRugged));
    }

    #[test]
    fn test_gains_above_threshold() {
        assert_eq!(judge("200.01"), Some(JudgmentLabel::Gains));
        assert_eq!(judge("300"), Some(JudgmentLabel::Gains));
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(judge("-100"), None);
        assert_eq!(judge("200"), None);
    }

    #[test]
    fn test_between_thresholds_is_unlabeled() {
        assert_eq!(judge("0"), None);
        assert_eq!(judge("10"), None);
        assert_eq!(judge("-99.99"), None);
        assert_eq!(judge("199.99"), None);
    }

    #[test]
    fn test_full_exit_does_not_change_label() {
        let policy = JudgmentPolicy::default();
        let profit = Decimal::from_i64(10);
        assert_eq!(judge_profit(profit, true, &policy), None);
        assert_eq!(judge_profit(profit, false, &policy), None);
    }
}
