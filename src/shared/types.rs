//! Common types used across the application

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token decimals used by STRK and most Starknet ERC-20s.
pub const DEFAULT_DECIMALS: u8 = 18;

/// A loosely typed value as handed over by a user or a contract binding:
/// missing, free text, or an already parsed integer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawValue {
    #[default]
    Missing,
    Text(String),
    Int(U256),
}

impl RawValue {
    /// Mirrors what a caller would consider "nothing there": no value, an
    /// empty string or the integer zero.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Text(text) => text.is_empty(),
            RawValue::Int(value) => value.is_zero(),
        }
    }

    /// Textual representation used as a formatting fallback.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Missing => String::new(),
            RawValue::Text(text) => text.clone(),
            RawValue::Int(value) => value.to_string(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        RawValue::Int(U256::from(value))
    }
}

impl From<u128> for RawValue {
    fn from(value: u128) -> Self {
        RawValue::Int(U256::from(value))
    }
}

impl From<U256> for RawValue {
    fn from(value: U256) -> Self {
        RawValue::Int(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// Token the pools are denominated in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenInfo {
    fn default() -> Self {
        Self {
            symbol: "STRK".to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(RawValue::Missing.is_falsy());
        assert!(RawValue::from("").is_falsy());
        assert!(RawValue::from(0u64).is_falsy());
        assert!(RawValue::from(None::<&str>).is_falsy());
        assert!(!RawValue::from("0").is_falsy());
        assert!(!RawValue::from(7u64).is_falsy());
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(RawValue::Missing.to_text(), "");
        assert_eq!(RawValue::from(42u128).to_text(), "42");
        assert_eq!(RawValue::from(Some("abc")).to_text(), "abc");
    }
}
