//! Form state for a pool that has not been created yet

use crate::domain::codec::{normalize_address, to_low_high, AmountCodec};
use crate::domain::contract::CreatePoolRequest;
use crate::shared::errors::{AppError, PoolError};
use crate::shared::types::RawValue;

pub const DEFAULT_EMOJI: &str = "🎯";

pub const EMOJI_OPTIONS: [&str; 12] = [
    "🎵", "🏖️", "🎬", "🍕", "🎯", "🚗", "🏠", "🎉", "💰", "🎁", "🌟", "🦄",
];

/// Fields of the creation dialog. `target` is a human amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoolDraft {
    pub title: String,
    pub description: String,
    pub target: String,
    pub emoji: String,
}

impl Default for NewPoolDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            target: String::new(),
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

impl NewPoolDraft {
    pub fn set_emoji(&mut self, emoji: &str) -> Result<(), PoolError> {
        if !EMOJI_OPTIONS.contains(&emoji) {
            return Err(PoolError::InvalidDraft(format!("{emoji} is not one of the emoji options")));
        }
        self.emoji = emoji.to_string();
        Ok(())
    }

    /// Encode the draft as `create_pool` arguments.
    ///
    /// The contract stores a single string, so the description is sent and
    /// the title stands in for it when the description is blank.
    pub fn to_request(
        &self,
        codec: &AmountCodec,
        recipient: impl Into<RawValue>,
    ) -> Result<CreatePoolRequest, AppError> {
        let description = match (self.description.trim(), self.title.trim()) {
            ("", "") => {
                return Err(PoolError::InvalidDraft("a title or description is required".to_string()).into())
            }
            ("", title) => title.to_string(),
            (description, _) => description.to_string(),
        };

        let target = codec.to_base_units(&self.target)?;
        if target.is_zero() {
            return Err(PoolError::InvalidDraft("target must be greater than zero".to_string()).into());
        }

        Ok(CreatePoolRequest {
            description,
            target: to_low_high(target),
            recipient: normalize_address(recipient)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codec::U256Split;
    use crate::shared::errors::CodecError;

    fn draft(title: &str, description: &str, target: &str) -> NewPoolDraft {
        NewPoolDraft {
            title: title.to_string(),
            description: description.to_string(),
            target: target.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_emoji() {
        assert_eq!(NewPoolDraft::default().emoji, "🎯");
    }

    #[test]
    fn test_set_emoji() {
        let mut d = NewPoolDraft::default();
        d.set_emoji("🦄").unwrap();
        assert_eq!(d.emoji, "🦄");
        assert!(d.set_emoji("🐍").is_err());
        assert_eq!(d.emoji, "🦄");
    }

    #[test]
    fn test_to_request_scales_target() {
        let codec = AmountCodec::default();
        let request = draft("Concert", "Tickets for Friday", "500")
            .to_request(&codec, "0x1a2b")
            .unwrap();
        assert_eq!(request.description, "Tickets for Friday");
        assert_eq!(
            request.target,
            U256Split {
                low: 500_000_000_000_000_000_000,
                high: 0
            }
        );
        assert_eq!(request.recipient, "0x1a2b");
    }

    #[test]
    fn test_to_request_falls_back_to_title() {
        let codec = AmountCodec::default();
        let request = draft("Pizza night", "  ", "1").to_request(&codec, 255u64).unwrap();
        assert_eq!(request.description, "Pizza night");
        assert_eq!(request.recipient, "0xff");
    }

    #[test]
    fn test_to_request_missing_recipient_is_zero_address() {
        let codec = AmountCodec::default();
        let request = draft("", "Trip", "1")
            .to_request(&codec, RawValue::Missing)
            .unwrap();
        assert_eq!(request.recipient, "0x0");
    }

    #[test]
    fn test_to_request_errors() {
        let codec = AmountCodec::default();
        assert!(matches!(
            draft("", "", "1").to_request(&codec, "0x1"),
            Err(AppError::Pool(PoolError::InvalidDraft(_)))
        ));
        assert!(matches!(
            draft("a", "b", "lots").to_request(&codec, "0x1"),
            Err(AppError::Codec(CodecError::InvalidAmount(_)))
        ));
        assert!(matches!(
            draft("a", "b", "0").to_request(&codec, "0x1"),
            Err(AppError::Pool(PoolError::InvalidDraft(_)))
        ));
        assert!(matches!(
            draft("a", "b", "1").to_request(&codec, "alice"),
            Err(AppError::Codec(CodecError::InvalidAddress(_)))
        ));
    }
}
