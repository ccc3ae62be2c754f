//! Pool domain - savings pools as recorded by the Pooler contract

mod draft;
mod progress;
mod view_state;

pub use draft::{NewPoolDraft, DEFAULT_EMOJI, EMOJI_OPTIONS};
pub use progress::{is_complete, progress_ratio};
pub use view_state::{FetchState, PoolViewState};

use primitive_types::U256;
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::PoolError;

/// Snapshot of a pool as returned by `get_pool`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub description: String,
    /// Goal in token base units.
    pub target: U256,
    pub recipient: String,
    /// Contributed so far, in token base units.
    pub current: U256,
    /// Completion flag as reported by the contract.
    pub is_complete: bool,
}

/// Key of a pool in the contract's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(pub u64);

impl FromStr for PoolId {
    type Err = PoolError;

    /// Only plain ASCII digits are accepted: no sign, whitespace or exponent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PoolError::InvalidPoolIdentifier(s.to_string()));
        }
        s.parse::<u64>()
            .map(PoolId)
            .map_err(|_| PoolError::InvalidPoolIdentifier(s.to_string()))
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_id_accepts_digits_only() {
        assert_eq!("12".parse::<PoolId>(), Ok(PoolId(12)));
        assert_eq!("0".parse::<PoolId>(), Ok(PoolId(0)));
        assert_eq!("007".parse::<PoolId>(), Ok(PoolId(7)));

        for input in ["", "12a", "-1", "+1", " 12", "1.0", "1e3", "٣"] {
            assert_eq!(
                input.parse::<PoolId>(),
                Err(PoolError::InvalidPoolIdentifier(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_pool_id_out_of_range() {
        assert!("18446744073709551616".parse::<PoolId>().is_err());
        assert_eq!(
            "18446744073709551615".parse::<PoolId>(),
            Ok(PoolId(u64::MAX))
        );
    }
}
