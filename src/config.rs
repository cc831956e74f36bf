use crate::domain::Decimal;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Engine policy: quote-asset recognition plus judgment thresholds.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub quotes: QuotePolicy,
    pub judgment: JudgmentPolicy,
}

/// The fixed set of stable/native symbols treated as the reference side of
/// a swap. Matching is case-sensitive and exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePolicy {
    symbols: BTreeSet<String>,
}

const DEFAULT_QUOTE_SYMBOLS: [&str; 5] = ["USDT", "USDC", "DAI", "ETH", "WETH"];

impl QuotePolicy {
    pub fn new(symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// True when the symbol names a recognized quote asset. A missing
    /// symbol never matches.
    pub fn is_quote(&self, symbol: Option<&str>) -> bool {
        match symbol {
            Some(s) => self.symbols.contains(s),
            None => false,
        }
    }
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_SYMBOLS.iter().map(|s| s.to_string()))
    }
}

/// Profit thresholds for judgmental labeling. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgmentPolicy {
    /// Below this, the friend "got rugged".
    pub rug_threshold: Decimal,
    /// Above this, the friend "made gains".
    pub gains_threshold: Decimal,
}

impl Default for JudgmentPolicy {
    fn default() -> Self {
        Self {
            rug_threshold: Decimal::from_i64(-100),
            gains_threshold: Decimal::from_i64(200),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Build a config from an environment map. Every key is optional; the
    /// defaults are the spec'd production policy.
    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let rug_threshold = parse_decimal(&env_map, "RUG_THRESHOLD")?
            .unwrap_or_else(|| JudgmentPolicy::default().rug_threshold);
        let gains_threshold = parse_decimal(&env_map, "GAINS_THRESHOLD")?
            .unwrap_or_else(|| JudgmentPolicy::default().gains_threshold);

        let quotes = match env_map.get("QUOTE_SYMBOLS") {
            Some(symbols) => QuotePolicy::new(
                symbols
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
            ),
            None => QuotePolicy::default(),
        };

        Ok(EngineConfig {
            quotes,
            judgment: JudgmentPolicy {
                rug_threshold,
                gains_threshold,
            },
        })
    }
}

fn parse_decimal(
    env_map: &HashMap<String, String>,
    key: &str,
) -> Result<Option<Decimal>, ConfigError> {
    match env_map.get(key) {
        Some(raw) => Decimal::from_str_canonical(raw)
            .map(Some)
            .map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "must be a decimal number".to_string())
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quote_symbols() {
        let quotes = QuotePolicy::default();
        for symbol in ["USDT", "USDC", "DAI", "ETH", "WETH"] {
            assert!(quotes.is_quote(Some(symbol)), "{} should be quote", symbol);
        }
        assert!(!quotes.is_quote(Some("TOKX")));
        assert!(!quotes.is_quote(Some("usdc")), "matching is case-sensitive");
        assert!(!quotes.is_quote(None));
    }

    #[test]
    fn test_default_thresholds() {
        let policy = JudgmentPolicy::default();
        assert_eq!(policy.rug_threshold, Decimal::from_i64(-100));
        assert_eq!(policy.gains_threshold, Decimal::from_i64(200));
    }

    #[test]
    fn test_from_env_map_defaults() {
        let config = EngineConfig::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.judgment, JudgmentPolicy::default());
        assert_eq!(config.quotes, QuotePolicy::default());
    }

    #[test]
    fn test_from_env_map_overrides() {
        let mut env_map = HashMap::new();
        env_map.insert("RUG_THRESHOLD".to_string(), "-50".to_string());
        env_map.insert("GAINS_THRESHOLD".to_string(), "1000".to_string());
        env_map.insert("QUOTE_SYMBOLS".to_string(), "USDC, DAI".to_string());

        let config = EngineConfig::from_env_map(env_map).unwrap();
        assert_eq!(config.judgment.rug_threshold, Decimal::from_i64(-50));
        assert_eq!(config.judgment.gains_threshold, Decimal::from_i64(1000));
        assert!(config.quotes.is_quote(Some("DAI")));
        assert!(!config.quotes.is_quote(Some("ETH")));
    }

    #[test]
    fn test_invalid_threshold() {
        let mut env_map = HashMap::new();
        env_map.insert("RUG_THRESHOLD".to_string(), "not_a_number".to_string());
        let result = EngineConfig::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "RUG_THRESHOLD"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
