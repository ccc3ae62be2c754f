//! Conversions between human decimal amounts, token base units and the
//! two-word u256 representation expected by Cairo contracts.

use bigdecimal::num_bigint::{BigInt, Sign, ToBigInt};
use bigdecimal::BigDecimal;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::number_format::NumberFormat;
use crate::shared::errors::CodecError;
use crate::shared::types::{RawValue, DEFAULT_DECIMALS};

/// Largest decimals value for which `10^decimals` fits in a U256.
pub const MAX_DECIMALS: u8 = 77;

/// Decimal digits of `U256::MAX`.
const U256_MAX_DIGITS: usize = 78;

/// A u256 split into the `{low, high}` 128-bit words of the Cairo ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct U256Split {
    pub low: u128,
    pub high: u128,
}

impl U256Split {
    pub fn to_u256(self) -> U256 {
        (U256::from(self.high) << 128) | U256::from(self.low)
    }
}

/// Split a value into its low and high 128-bit words.
pub fn to_low_high(value: U256) -> U256Split {
    U256Split {
        low: value.low_u128(),
        high: (value >> 128).low_u128(),
    }
}

/// Parse a human decimal (`"1.5"`, `".25"`, `"2e3"`) and scale it by
/// `10^decimals`, truncating any digits below one base unit.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, CodecError> {
    let invalid = |reason: &str| CodecError::InvalidAmount(format!("{input:?} {reason}"));

    if decimals > MAX_DECIMALS {
        return Err(invalid("uses more decimals than a u256 can scale"));
    }

    let s = input.trim();
    // BigDecimal also takes digit separators, which are not amounts here
    if s.is_empty()
        || !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return Err(invalid("is not a decimal number"));
    }
    let value = BigDecimal::from_str(s).map_err(|_| invalid("is not a decimal number"))?;
    match value.sign() {
        Sign::Minus => return Err(invalid("is negative")),
        Sign::NoSign => return Ok(U256::zero()),
        Sign::Plus => {}
    }

    // Integer digits once scaled; bounds the work for extreme exponents.
    let (digits, scale) = value.as_bigint_and_exponent();
    let magnitude = digits.to_string().len() as i64 - scale + i64::from(decimals);
    if magnitude <= 0 {
        return Ok(U256::zero());
    }
    if magnitude > U256_MAX_DIGITS as i64 {
        return Err(CodecError::AmountOverflow(input.to_string()));
    }

    let scaled = (value * BigDecimal::new(BigInt::from(1u8), -i64::from(decimals))).with_scale(0);
    big_decimal_to_u256(&scaled).ok_or_else(|| CodecError::AmountOverflow(input.to_string()))
}

/// Convert an integral, non-negative decimal that fits in 256 bits.
pub fn big_decimal_to_u256(value: &BigDecimal) -> Option<U256> {
    if !value.is_integer() {
        return None;
    }
    let (sign, bytes) = value.to_bigint()?.to_bytes_be();
    if sign == Sign::Minus || bytes.len() > 32 {
        return None;
    }
    Some(U256::from_big_endian(&bytes))
}

/// Read an integer out of a raw value. Text may be decimal or `0x` hex.
pub fn parse_integer(raw: &RawValue) -> Option<U256> {
    match raw {
        RawValue::Missing => None,
        RawValue::Int(value) => Some(*value),
        RawValue::Text(text) => {
            let text = text.trim();
            if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                if hex.is_empty() {
                    return None;
                }
                return U256::from_str_radix(hex, 16).ok();
            }
            if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            U256::from_dec_str(text).ok()
        }
    }
}

/// Render base units as a human amount, rounded half-up to at most
/// `format.max_fraction_digits` fraction digits with trailing zeros dropped.
/// Anything that is not an integer is returned as its original text.
pub fn format_units(raw: &RawValue, decimals: u8, format: &NumberFormat) -> String {
    let Some(value) = parse_integer(raw) else {
        return raw.to_text();
    };
    if decimals > MAX_DECIMALS {
        return raw.to_text();
    }

    let kept = format.max_fraction_digits.min(decimals);
    let dropped = decimals - kept;

    let scaled = if dropped > 0 {
        let divisor = U256::exp10(dropped as usize);
        let (quotient, remainder) = value.div_mod(divisor);
        if remainder >= divisor - remainder {
            quotient + U256::one()
        } else {
            quotient
        }
    } else {
        value
    };

    let (integer, fraction) = scaled.div_mod(U256::exp10(kept as usize));
    let fraction = if kept > 0 {
        let padded = format!("{:0>width$}", fraction.to_string(), width = kept as usize);
        padded.trim_end_matches('0').to_string()
    } else {
        String::new()
    };

    format.render(&integer.to_string(), &fraction)
}

/// Render an integer with group separators, falling back to the original
/// text when it does not parse. Blank text reads as zero and negative
/// decimal text keeps its sign.
pub fn format_integer(raw: &RawValue, format: &NumberFormat) -> String {
    if let RawValue::Text(text) = raw {
        let text = text.trim();
        if text.is_empty() {
            return "0".to_string();
        }
        if let Some(magnitude) = text.strip_prefix('-') {
            if magnitude.is_empty() || !magnitude.chars().all(|c| c.is_ascii_digit()) {
                return raw.to_text();
            }
            return match U256::from_dec_str(magnitude) {
                Ok(value) if value.is_zero() => "0".to_string(),
                Ok(value) => format!("-{}", format.group(&value.to_string())),
                Err(_) => raw.to_text(),
            };
        }
    }
    match parse_integer(raw) {
        Some(value) => format.group(&value.to_string()),
        None => raw.to_text(),
    }
}

/// Amount conversions bound to one token's decimals and a display format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCodec {
    decimals: u8,
    format: NumberFormat,
}

impl Default for AmountCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS, NumberFormat::default())
    }
}

impl AmountCodec {
    pub fn new(decimals: u8, format: NumberFormat) -> Self {
        Self { decimals, format }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn to_base_units(&self, human: &str) -> Result<U256, CodecError> {
        parse_units(human, self.decimals)
    }

    /// Parse a human amount straight into the contract's u256 words.
    pub fn to_u256_split(&self, human: &str) -> Result<U256Split, CodecError> {
        self.to_base_units(human).map(to_low_high)
    }

    pub fn from_base_units(&self, raw: impl Into<RawValue>) -> String {
        format_units(&raw.into(), self.decimals, &self.format)
    }

    pub fn format_integer(&self, raw: impl Into<RawValue>) -> String {
        format_integer(&raw.into(), &self.format)
    }
}
