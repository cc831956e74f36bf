//! Mock portfolio query for testing without network calls.

use super::{PortfolioQuery, PortfolioQueryError, QueryOutcome};
use crate::domain::{Address, PortfolioSnapshot};
use async_trait::async_trait;

/// Mock query that returns predefined snapshots, filtered to the
/// requested owners.
#[derive(Debug, Clone, Default)]
pub struct MockPortfolioQuery {
    portfolios: Vec<PortfolioSnapshot>,
    partial_errors: Vec<String>,
    loading: bool,
}

impl MockPortfolioQuery {
    /// Create a new mock with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot to the mock.
    pub fn with_portfolio(mut self, snapshot: PortfolioSnapshot) -> Self {
        self.portfolios.push(snapshot);
        self
    }

    /// Record a per-owner error delivered alongside the data.
    pub fn with_partial_error(mut self, message: String) -> Self {
        self.partial_errors.push(message);
        self
    }

    /// Make the mock report a loading state.
    pub fn with_loading(mut self) -> Self {
        self.loading = true;
        self
    }
}

#[async_trait]
impl PortfolioQuery for MockPortfolioQuery {
    async fn fetch_portfolios(
        &self,
        owners: &[Address],
    ) -> Result<QueryOutcome, PortfolioQueryError> {
        if self.loading {
            return Ok(QueryOutcome::Loading);
        }

        Ok(QueryOutcome::Ready {
            portfolios: self
                .portfolios
                .iter()
                .filter(|p| owners.contains(&p.owner_address))
                .cloned()
                .collect(),
            partial_errors: self.partial_errors.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot(owner: &str) -> PortfolioSnapshot {
        PortfolioSnapshot {
            owner_address: Address::new(owner.to_string()),
            asset_activities: vec![],
            balances: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_filters_to_requested_owners() {
        let mock = MockPortfolioQuery::new()
            .with_portfolio(snapshot("0xa"))
            .with_portfolio(snapshot("0xb"));

        let outcome = mock
            .fetch_portfolios(&[Address::new("0xa".to_string())])
            .await
            .unwrap();
        assert_eq!(outcome.portfolios().len(), 1);
        assert_eq!(outcome.portfolios()[0].owner_address.as_str(), "0xa");
    }

    #[tokio::test]
    async fn test_mock_loading_state() {
        let mock = MockPortfolioQuery::new()
            .with_portfolio(snapshot("0xa"))
            .with_loading();

        let outcome = mock
            .fetch_portfolios(&[Address::new("0xa".to_string())])
            .await
            .unwrap();
        assert_eq!(outcome, QueryOutcome::Loading);
    }

    #[tokio::test]
    async fn test_mock_partial_errors_still_deliver_data() {
        let mock = MockPortfolioQuery::new()
            .with_portfolio(snapshot("0xa"))
            .with_partial_error("indexer lag for 0xb".to_string());

        let outcome = mock
            .fetch_portfolios(&[Address::new("0xa".to_string())])
            .await
            .unwrap();
        match outcome {
            QueryOutcome::Ready {
                portfolios,
                partial_errors,
            } => {
                assert_eq!(portfolios.len(), 1);
                assert_eq!(partial_errors.len(), 1);
            }
            QueryOutcome::Loading => panic!("expected ready outcome"),
        }
    }
}
