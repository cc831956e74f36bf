pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::{EngineConfig, JudgmentPolicy, QuotePolicy};
pub use datasource::{MockPortfolioQuery, PortfolioQuery, PortfolioQueryError, QueryOutcome};
pub use domain::{
    Address, AssetActivity, AssetChange, AssetId, Decimal, Direction, FeedEvent, JudgmentLabel,
    JudgmentalEvent, PlainActivity, PortfolioSnapshot, SwapKind, SwapRecord, TimeMs, TxHash,
};
pub use engine::{AssetLedger, BuySellMap, OwnerLedgers};
pub use error::EngineError;
pub use orchestration::FeedAggregator;
