use crate::config::ConfigError;
use crate::datasource::PortfolioQueryError;
use thiserror::Error;

/// Top-level error for callers driving the engine end to end.
///
/// Malformed transactions and missing upstream data never surface here;
/// those are skipped or defaulted per the ingestion policy. Only
/// collaborator and configuration failures are fallible.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Query(#[from] PortfolioQueryError),
}
