//! Orchestration: the produced interface over the pure engine.

pub mod aggregator;

pub use aggregator::FeedAggregator;
