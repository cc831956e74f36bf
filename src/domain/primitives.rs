//! Domain primitives: TimeMs, Address, TxHash, AssetId, Direction.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Time in milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    /// Create a TimeMs from milliseconds.
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        TimeMs(chrono::Utc::now().timestamp_millis())
    }

    /// Get the underlying milliseconds value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Wallet address (hex string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl Address {
    /// Create an Address from a string.
    pub fn new(addr: String) -> Self {
        Address(addr)
    }

    /// Get the address as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl TxHash {
    /// Create a TxHash from a string.
    pub fn new(hash: String) -> Self {
        TxHash(hash)
    }

    /// Get the hash as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transfer direction relative to the owning account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Asset flowing into the owner's wallet.
    In,
    /// Asset flowing out of the owner's wallet.
    Out,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "IN"),
            Direction::Out => write!(f, "OUT"),
        }
    }
}

/// Identity of a traded asset.
///
/// Replaces the remote payload's stringly-typed sentinels: the balance map
/// reserves the literal key `NATIVE` for the chain's native asset, and a
/// transfer leg with no token address is grouped under `Other`. Both map to
/// explicit variants here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetId {
    /// A token contract address.
    Known(String),
    /// The chain's native asset (`NATIVE` on the wire).
    Native,
    /// Address absent from the payload (`Other` on the wire).
    Unknown,
}

const NATIVE_KEY: &str = "NATIVE";
const UNKNOWN_KEY: &str = "Other";

impl AssetId {
    /// Build an AssetId from an optional contract address.
    pub fn from_address(address: Option<&str>) -> Self {
        match address {
            Some(addr) => AssetId::Known(addr.to_string()),
            None => AssetId::Unknown,
        }
    }

    /// Parse an AssetId from its wire key.
    pub fn from_key(key: &str) -> Self {
        match key {
            NATIVE_KEY => AssetId::Native,
            UNKNOWN_KEY => AssetId::Unknown,
            addr => AssetId::Known(addr.to_string()),
        }
    }

    /// The wire key for this asset, usable as a map key.
    pub fn as_key(&self) -> &str {
        match self {
            AssetId::Known(addr) => addr,
            AssetId::Native => NATIVE_KEY,
            AssetId::Unknown => UNKNOWN_KEY,
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_key())
    }
}

struct AssetIdVisitor;

impl<'de> Visitor<'de> for AssetIdVisitor {
    type Value = AssetId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an asset address string or null")
    }

    fn visit_str<E>(self, v: &str) -> Result<AssetId, E>
    where
        E: de::Error,
    {
        Ok(AssetId::from_key(v))
    }

    fn visit_none<E>(self) -> Result<AssetId, E>
    where
        E: de::Error,
    {
        Ok(AssetId::Unknown)
    }

    fn visit_unit<E>(self) -> Result<AssetId, E>
    where
        E: de::Error,
    {
        Ok(AssetId::Unknown)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<AssetId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AssetIdVisitor)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts a string, null, or a missing field routed through Option.
        deserializer.deserialize_option(AssetIdVisitor)
    }
}

impl Default for AssetId {
    fn default() -> Self {
        AssetId::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::In).unwrap();
        assert_eq!(json, "\"IN\"");

        let json = serde_json::to_string(&Direction::Out).unwrap();
        assert_eq!(json, "\"OUT\"");
    }

    #[test]
    fn test_asset_id_wire_keys() {
        assert_eq!(AssetId::from_key("NATIVE"), AssetId::Native);
        assert_eq!(AssetId::from_key("Other"), AssetId::Unknown);
        assert_eq!(
            AssetId::from_key("0xabc"),
            AssetId::Known("0xabc".to_string())
        );

        assert_eq!(AssetId::Native.as_key(), "NATIVE");
        assert_eq!(AssetId::Unknown.as_key(), "Other");
        assert_eq!(AssetId::Known("0xabc".to_string()).as_key(), "0xabc");
    }

    #[test]
    fn test_asset_id_from_address() {
        assert_eq!(
            AssetId::from_address(Some("0xdef")),
            AssetId::Known("0xdef".to_string())
        );
        assert_eq!(AssetId::from_address(None), AssetId::Unknown);
    }

    #[test]
    fn test_asset_id_deserializes_null_as_unknown() {
        let id: AssetId = serde_json::from_str("null").unwrap();
        assert_eq!(id, AssetId::Unknown);

        let id: AssetId = serde_json::from_str("\"NATIVE\"").unwrap();
        assert_eq!(id, AssetId::Native);

        let id: AssetId = serde_json::from_str("\"0x123\"").unwrap();
        assert_eq!(id, AssetId::Known("0x123".to_string()));
    }

    #[test]
    fn test_asset_id_serialization_roundtrip() {
        for id in [
            AssetId::Native,
            AssetId::Unknown,
            AssetId::Known("0x123".to_string()),
        ] {
            let json = serde_json::to_string(&id).unwrap();
            let back: AssetId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, back);
        }
    }

    #[test]
    fn test_address_display() {
        let addr = Address::new("0x123abc".to_string());
        assert_eq!(addr.to_string(), "0x123abc");
    }

    #[test]
    fn test_timems_ordering() {
        let t1 = TimeMs::new(1000);
        let t2 = TimeMs::new(2000);
        assert!(t1 < t2);
    }

    #[test]
    fn test_timems_now_is_positive() {
        assert!(TimeMs::now().as_i64() > 0);
    }
}
