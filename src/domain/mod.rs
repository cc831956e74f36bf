//! Domain types for the social-activity aggregation engine.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: TimeMs, Address, TxHash, AssetId, Direction
//! - Raw portfolio snapshot input types as delivered by the remote query
//! - Derived SwapRecord and the output FeedEvent variants

pub mod activity;
pub mod decimal;
pub mod feed;
pub mod primitives;
pub mod swap;

pub use activity::{ActivityType, AssetActivity, AssetChange, ChangeKind, PortfolioSnapshot};
pub use decimal::Decimal;
pub use feed::{FeedEvent, JudgmentLabel, JudgmentalEvent, PlainActivity};
pub use primitives::{Address, AssetId, Direction, TimeMs, TxHash};
pub use swap::{SwapKind, SwapRecord};
