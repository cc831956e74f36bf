//! Portfolio query abstraction: the remote collaborator that delivers
//! per-owner portfolio snapshots.

use crate::domain::{Address, PortfolioSnapshot};
use async_trait::async_trait;
use thiserror::Error;

pub mod mock;

pub use mock::MockPortfolioQuery;

/// Outcome of a portfolio query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The upstream source has not produced data yet. The engine treats
    /// this as "no data", never as an error.
    Loading,
    /// Snapshots were delivered, possibly alongside per-owner errors
    /// (errors-allowed policy: partial data is still processed).
    Ready {
        portfolios: Vec<PortfolioSnapshot>,
        partial_errors: Vec<String>,
    },
}

impl QueryOutcome {
    /// Delivered snapshots, empty while loading.
    pub fn portfolios(&self) -> &[PortfolioSnapshot] {
        match self {
            QueryOutcome::Loading => &[],
            QueryOutcome::Ready { portfolios, .. } => portfolios,
        }
    }
}

/// Query collaborator trait. Implementations own transport, retry, and
/// cancellation; the engine only consumes the resolved outcome.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Fetch portfolio snapshots for a set of owner addresses.
    async fn fetch_portfolios(
        &self,
        owners: &[Address],
    ) -> Result<QueryOutcome, PortfolioQueryError>;
}

/// Error type for portfolio query operations.
#[derive(Debug, Clone, Error)]
pub enum PortfolioQueryError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Error: {0}")]
    Other(String),
}
