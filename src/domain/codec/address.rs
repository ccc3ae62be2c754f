//! Normalization of recipient identifiers into `0x`-prefixed hex strings

use primitive_types::U256;

use crate::shared::errors::CodecError;
use crate::shared::types::RawValue;

/// The canonical zero address.
pub const ZERO_ADDRESS: &str = "0x0";

/// Lowercase `0x` hex rendering of an integer.
pub fn to_hex(value: U256) -> String {
    if value.is_zero() {
        ZERO_ADDRESS.to_string()
    } else {
        format!("0x{value:x}")
    }
}

/// Normalize an address-like value.
///
/// Falsy values map to [`ZERO_ADDRESS`]. Text that already starts with `0x`
/// is returned untouched, payload included. Anything else must be a base-10
/// integer or `0X` hex, and comes back as lowercase `0x` hex.
pub fn normalize(value: impl Into<RawValue>) -> Result<String, CodecError> {
    let value = value.into();
    if value.is_falsy() {
        return Ok(ZERO_ADDRESS.to_string());
    }

    match value {
        RawValue::Text(text) if text.starts_with("0x") => Ok(text),
        RawValue::Text(text) => {
            let trimmed = text.trim();
            let (digits, radix) = match trimmed.strip_prefix("0X") {
                Some(hex) => (hex, 16),
                None => (trimmed, 10),
            };
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(CodecError::InvalidAddress(text));
            }
            U256::from_str_radix(digits, radix)
                .map(to_hex)
                .map_err(|_| CodecError::InvalidAddress(text))
        }
        RawValue::Int(value) => Ok(to_hex(value)),
        RawValue::Missing => Ok(ZERO_ADDRESS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values_are_zero_address() {
        assert_eq!(normalize(0u64).unwrap(), "0x0");
        assert_eq!(normalize("").unwrap(), "0x0");
        assert_eq!(normalize(RawValue::Missing).unwrap(), "0x0");
        assert_eq!(normalize(None::<String>).unwrap(), "0x0");
        assert_eq!(normalize("0").unwrap(), "0x0");
    }

    #[test]
    fn test_hex_passes_through_unchanged() {
        assert_eq!(normalize("0x1a2b").unwrap(), "0x1a2b");
        // payload is not validated
        assert_eq!(normalize("0xNOTHEX").unwrap(), "0xNOTHEX");
    }

    #[test]
    fn test_decimal_is_converted() {
        assert_eq!(normalize(255u64).unwrap(), "0xff");
        assert_eq!(normalize("255").unwrap(), "0xff");
        assert_eq!(
            normalize("2087021424722619777119509474943472645767659996348769578120564519014510906823").unwrap(),
            "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7"
        );
    }

    #[test]
    fn test_uppercase_hex_prefix_is_lowercased() {
        assert_eq!(normalize("0X1A").unwrap(), "0x1a");
        assert_eq!(normalize("0X00").unwrap(), "0x0");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            normalize("bob"),
            Err(CodecError::InvalidAddress("bob".to_string()))
        );
        assert!(normalize("0X").is_err());
        assert!(normalize("0XZZ").is_err());
        assert!(normalize("-1").is_err());
        assert!(normalize("9".repeat(80)).is_err());
    }
}
