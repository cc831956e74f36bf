//! Feed aggregator: drives classification, accumulation, labeling, and
//! composition over a batch of portfolio snapshots.

use crate::config::EngineConfig;
use crate::datasource::{PortfolioQuery, QueryOutcome};
use crate::domain::{Address, FeedEvent, PlainActivity, PortfolioSnapshot};
use crate::engine::{accumulate_owner, compose_feed, BuySellMap};
use crate::error::EngineError;
use futures::future::join_all;
use tracing::warn;

/// Stateless aggregation facade. Holds only policy; every computation is
/// a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct FeedAggregator {
    config: EngineConfig,
}

impl FeedAggregator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build per-owner, per-asset ledgers from fetched snapshots.
    ///
    /// Deterministic and order-preserving per owner: buys and sells land
    /// in original transaction order.
    pub fn compute_ledgers(&self, snapshots: &[PortfolioSnapshot]) -> BuySellMap {
        let mut map = BuySellMap::new();
        for snapshot in snapshots {
            map.insert(
                snapshot.owner_address.clone(),
                accumulate_owner(snapshot, &self.config.quotes),
            );
        }
        map
    }

    /// Like [`compute_ledgers`](Self::compute_ledgers), fanning out one
    /// task per owner. Owners are independent, so the merge is
    /// commutative: content never depends on completion order.
    pub async fn compute_ledgers_concurrent(
        &self,
        snapshots: Vec<PortfolioSnapshot>,
    ) -> BuySellMap {
        let tasks = snapshots.into_iter().map(|snapshot| {
            let quotes = self.config.quotes.clone();
            tokio::spawn(async move {
                let ledgers = accumulate_owner(&snapshot, &quotes);
                (snapshot.owner_address, ledgers)
            })
        });

        let mut map = BuySellMap::new();
        for joined in join_all(tasks).await {
            match joined {
                Ok((owner, ledgers)) => {
                    map.insert(owner, ledgers);
                }
                Err(e) => warn!(error = %e, "owner aggregation task failed"),
            }
        }
        map
    }

    /// Full pipeline over already-fetched snapshots: ledgers, judgment
    /// labels, and composition with the plain activity stream.
    pub fn compute_feed(
        &self,
        snapshots: &[PortfolioSnapshot],
        plain: Vec<PlainActivity>,
    ) -> Vec<FeedEvent> {
        let ledgers = self.compute_ledgers(snapshots);
        compose_feed(&ledgers, plain, &self.config.judgment)
    }

    /// Drive the query collaborator and compose the feed.
    ///
    /// A loading outcome contributes no judgmental entries; the plain
    /// stream alone makes up the feed. Partial per-owner errors are
    /// logged and the delivered snapshots still processed.
    pub async fn fetch_and_compute_feed(
        &self,
        query: &dyn PortfolioQuery,
        owners: &[Address],
        plain: Vec<PlainActivity>,
    ) -> Result<Vec<FeedEvent>, EngineError> {
        let outcome = query.fetch_portfolios(owners).await?;

        if let QueryOutcome::Ready { partial_errors, .. } = &outcome {
            for message in partial_errors {
                warn!(error = %message, "portfolio query returned a partial error");
            }
        }

        Ok(self.compute_feed(outcome.portfolios(), plain))
    }
}
