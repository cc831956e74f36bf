//! Feed composer: merges judgment-labeled events with plain parsed
//! activity into a single feed.

use crate::config::JudgmentPolicy;
use crate::domain::{FeedEvent, JudgmentalEvent, PlainActivity, TimeMs};
use crate::engine::{judgment::judge_ledger, BuySellMap};

/// Compose the output feed, stamping judgmental events with the current
/// wall-clock time.
pub fn compose_feed(
    ledgers: &BuySellMap,
    plain: Vec<PlainActivity>,
    policy: &JudgmentPolicy,
) -> Vec<FeedEvent> {
    compose_feed_at(ledgers, plain, policy, TimeMs::now())
}

/// Compose the output feed with an explicit composition time.
///
/// Plain activities lead the feed in received order; one judgmental event
/// is appended per labeled (owner, asset) pair. Judgmental events carry
/// `now` rather than the originating transaction's time; this mirrors the
/// source behavior and is deliberately left uncorrected. An empty plain
/// stream yields a judgment-only feed. Feed content is independent of
/// owner iteration order.
pub fn compose_feed_at(
    ledgers: &BuySellMap,
    plain: Vec<PlainActivity>,
    policy: &JudgmentPolicy,
    now: TimeMs,
) -> Vec<FeedEvent> {
    let mut feed: Vec<FeedEvent> = plain.into_iter().map(FeedEvent::Plain).collect();

    for (owner, owner_ledgers) in ledgers {
        for (asset, ledger) in owner_ledgers {
            if let Some(label) = judge_ledger(ledger, policy) {
                feed.push(FeedEvent::Judgmental(JudgmentalEvent {
                    friend: owner.clone(),
                    label,
                    asset: asset.clone(),
                    timestamp: now,
                }));
            }
        }
    }

    feed
}
