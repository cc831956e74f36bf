//! Output feed types: plain parsed activity and judgment-labeled events.

use crate::domain::{Address, AssetId, TimeMs, TxHash};
use serde::{Deserialize, Serialize};

/// Qualitative judgment of a friend's position in one asset.
///
/// The full taxonomy is typed, but current emission policy only ever
/// produces `GotRugged` and `Gains`; the remaining variants are reserved
/// (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JudgmentLabel {
    GotRugged,
    ApedInto,
    Dumped,
    StillHodling,
    Gains,
}

impl JudgmentLabel {
    /// Human-readable feed template for this label.
    pub fn title(&self) -> &'static str {
        match self {
            JudgmentLabel::GotRugged => "Got rugged by",
            JudgmentLabel::ApedInto => "Aped into",
            JudgmentLabel::Dumped => "Dumped",
            JudgmentLabel::StillHodling => "Is still hodling",
            JudgmentLabel::Gains => "Made gains on",
        }
    }
}

impl std::fmt::Display for JudgmentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Normalized ordinary activity entry, produced by the external activity
/// parser and passed through the composer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainActivity {
    pub owner: Address,
    /// ENS name when the parser resolved one.
    #[serde(default)]
    pub ens_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub hash: Option<TxHash>,
    /// Original transaction time.
    pub timestamp: TimeMs,
}

/// Synthetic feed entry derived from profit thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgmentalEvent {
    pub friend: Address,
    pub label: JudgmentLabel,
    pub asset: AssetId,
    /// Stamped at composition time, not transaction time. Preserved from
    /// the source behavior; downstream ordering may depend on it.
    pub timestamp: TimeMs,
}

impl JudgmentalEvent {
    /// Feed text, e.g. "Got rugged by 0xtoken".
    pub fn description(&self) -> String {
        format!("{} {}", self.label.title(), self.asset)
    }
}

/// One entry of the composed feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedEvent {
    Plain(PlainActivity),
    Judgmental(JudgmentalEvent),
}

impl FeedEvent {
    /// The friend this entry is about.
    pub fn friend(&self) -> &Address {
        match self {
            FeedEvent::Plain(activity) => &activity.owner,
            FeedEvent::Judgmental(event) => &event.friend,
        }
    }

    pub fn as_judgmental(&self) -> Option<&JudgmentalEvent> {
        match self {
            FeedEvent::Judgmental(event) => Some(event),
            FeedEvent::Plain(_) => None,
        }
    }
}
