//! Felt-level serialization used by Cairo contracts

use primitive_types::U256;
use tiny_keccak::{Hasher, Keccak};

use crate::domain::codec::{to_hex, U256Split};
use crate::shared::errors::ContractError;

/// Bytes packed into each full ByteArray word.
const BYTES_PER_WORD: usize = 31;

/// `starknet_keccak`: keccak256 of the entry point name, masked to 250 bits.
pub fn selector(name: &str) -> U256 {
    let mut hasher = Keccak::v256();
    hasher.update(name.as_bytes());
    let mut digest = [0u8; 32];
    hasher.finalize(&mut digest);
    digest[0] &= 0x03;
    U256::from_big_endian(&digest)
}

/// Parse a `0x` hex felt as returned by a Starknet node.
pub fn parse_felt(value: &str) -> Result<U256, ContractError> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| ContractError::Decode(format!("felt {value:?} is not 0x-prefixed")))?;
    if hex.is_empty() {
        return Err(ContractError::Decode(format!("felt {value:?} is empty")));
    }
    U256::from_str_radix(hex, 16)
        .map_err(|_| ContractError::Decode(format!("felt {value:?} is not valid hex")))
}

pub fn felt_to_hex(value: U256) -> String {
    to_hex(value)
}

pub fn encode_u256(value: U256Split) -> [U256; 2] {
    [U256::from(value.low), U256::from(value.high)]
}

pub fn decode_u256(low: U256, high: U256) -> Result<U256, ContractError> {
    let fits = |word: U256| (word >> 128).is_zero();
    if !fits(low) || !fits(high) {
        return Err(ContractError::Decode("u256 word exceeds 128 bits".to_string()));
    }
    Ok(U256Split {
        low: low.low_u128(),
        high: high.low_u128(),
    }
    .to_u256())
}

pub fn decode_bool(value: U256) -> Result<bool, ContractError> {
    match value.low_u64() {
        0 if value.is_zero() => Ok(false),
        1 if value == U256::one() => Ok(true),
        _ => Err(ContractError::Decode(format!("{} is not a bool", felt_to_hex(value)))),
    }
}

fn to_usize(value: U256, what: &str) -> Result<usize, ContractError> {
    if value > U256::from(u32::MAX) {
        return Err(ContractError::Decode(format!("{what} {} is out of range", felt_to_hex(value))));
    }
    Ok(value.low_u64() as usize)
}

fn word_bytes(word: U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    word.to_big_endian(&mut bytes);
    bytes
}

/// Serialize a string as a Cairo `ByteArray`:
/// `[full_word_count, full_words.., pending_word, pending_word_len]`.
pub fn encode_byte_array(value: &str) -> Vec<U256> {
    let chunks = value.as_bytes().chunks_exact(BYTES_PER_WORD);
    let pending = chunks.remainder();

    let mut felts = Vec::with_capacity(chunks.len() + 3);
    felts.push(U256::from(chunks.len()));
    felts.extend(chunks.map(U256::from_big_endian));
    felts.push(U256::from_big_endian(pending));
    felts.push(U256::from(pending.len()));
    felts
}

/// Read a `ByteArray` from the front of `felts`, returning the string and
/// the number of felts consumed.
pub fn decode_byte_array(felts: &[U256]) -> Result<(String, usize), ContractError> {
    let word_count = felts
        .first()
        .copied()
        .ok_or_else(|| ContractError::Decode("missing byte array length".to_string()))?;
    let word_count = to_usize(word_count, "byte array length")?;
    let consumed = word_count + 3;
    if felts.len() < consumed {
        return Err(ContractError::Decode(format!(
            "byte array needs {consumed} felts, got {}",
            felts.len()
        )));
    }

    let mut bytes = Vec::with_capacity((word_count + 1) * BYTES_PER_WORD);
    for word in &felts[1..=word_count] {
        let word = word_bytes(*word);
        if word[0] != 0 {
            return Err(ContractError::Decode("byte array word exceeds 31 bytes".to_string()));
        }
        bytes.extend_from_slice(&word[1..]);
    }

    let pending_len = to_usize(felts[word_count + 2], "pending word length")?;
    if pending_len >= BYTES_PER_WORD {
        return Err(ContractError::Decode(format!("pending word length {pending_len} is too large")));
    }
    let pending = word_bytes(felts[word_count + 1]);
    let (padding, data) = pending.split_at(32 - pending_len);
    if padding.iter().any(|b| *b != 0) {
        return Err(ContractError::Decode("pending word is longer than its length".to_string()));
    }
    bytes.extend_from_slice(data);

    String::from_utf8(bytes)
        .map(|value| (value, consumed))
        .map_err(|err| {
            ContractError::Decode(format!(
                "byte array is not UTF-8: 0x{}",
                hex::encode(err.as_bytes())
            ))
        })
}
