//! Calldata layouts of the Pooler contract entry points

use primitive_types::U256;

use super::felt::{
    decode_bool, decode_byte_array, decode_u256, encode_byte_array, encode_u256, felt_to_hex,
    parse_felt,
};
use crate::domain::codec::to_low_high;
use crate::domain::contract::{ContributionRequest, CreatePoolRequest};
use crate::domain::pool::{Pool, PoolId};
use crate::shared::errors::ContractError;

pub const GET_POOL: &str = "get_pool";
pub const CREATE_POOL: &str = "create_pool";
pub const CONTRIBUTE: &str = "contribute";

/// Felts following the description in a `get_pool` result.
const POOL_TAIL_LEN: usize = 6;

pub fn encode_get_pool(pool_id: PoolId) -> Vec<U256> {
    vec![U256::from(pool_id.0)]
}

/// `create_pool(description: ByteArray, target: u256, recipient: ContractAddress)`
pub fn encode_create_pool(request: &CreatePoolRequest) -> Result<Vec<U256>, ContractError> {
    let recipient = parse_felt(&request.recipient).map_err(|_| {
        ContractError::InvalidCalldata(format!("recipient {:?} is not a hex felt", request.recipient))
    })?;

    let mut calldata = encode_byte_array(&request.description);
    calldata.extend(encode_u256(request.target));
    calldata.push(recipient);
    Ok(calldata)
}

/// `contribute(pool_id: u64, amount: u256)`
pub fn encode_contribute(request: &ContributionRequest) -> Vec<U256> {
    let mut calldata = encode_get_pool(request.pool_id);
    calldata.extend(encode_u256(to_low_high(request.amount)));
    calldata
}

/// Decode the `(description, target, recipient, current, is_complete)`
/// tuple returned by `get_pool`.
pub fn decode_pool(felts: &[U256]) -> Result<Pool, ContractError> {
    let (description, consumed) = decode_byte_array(felts)?;
    let tail = &felts[consumed..];
    if tail.len() != POOL_TAIL_LEN {
        return Err(ContractError::Decode(format!(
            "expected {POOL_TAIL_LEN} felts after the description, got {}",
            tail.len()
        )));
    }

    Ok(Pool {
        description,
        target: decode_u256(tail[0], tail[1])?,
        recipient: felt_to_hex(tail[2]),
        current: decode_u256(tail[3], tail[4])?,
        is_complete: decode_bool(tail[5])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codec::U256Split;

    fn pool_felts(description: &str, target: u64, current: u64, complete: bool) -> Vec<U256> {
        let mut felts = encode_byte_array(description);
        felts.extend([
            U256::from(target),
            U256::zero(),
            U256::from(0xabcu64),
            U256::from(current),
            U256::zero(),
            U256::from(complete as u64),
        ]);
        felts
    }

    #[test]
    fn test_decode_pool() {
        let pool = decode_pool(&pool_felts("Beach house", 1000, 250, false)).unwrap();
        assert_eq!(
            pool,
            Pool {
                description: "Beach house".to_string(),
                target: U256::from(1000u64),
                recipient: "0xabc".to_string(),
                current: U256::from(250u64),
                is_complete: false,
            }
        );
    }

    #[test]
    fn test_decode_pool_with_high_words() {
        let mut felts = pool_felts("x", 0, 0, true);
        let n = felts.len();
        felts[n - 5] = U256::from(2u64);
        let pool = decode_pool(&felts).unwrap();
        assert_eq!(pool.target, U256::from(2u64) << 128);
        assert!(pool.is_complete);
    }

    #[test]
    fn test_decode_pool_rejects_wrong_shape() {
        let mut felts = pool_felts("Beach house", 1000, 250, false);
        felts.pop();
        assert!(matches!(decode_pool(&felts), Err(ContractError::Decode(_))));
        felts.extend([U256::zero(), U256::zero()]);
        assert!(matches!(decode_pool(&felts), Err(ContractError::Decode(_))));
    }

    #[test]
    fn test_encode_create_pool() {
        let request = CreatePoolRequest {
            description: "hi".to_string(),
            target: U256Split { low: 5, high: 1 },
            recipient: "0xff".to_string(),
        };
        assert_eq!(
            encode_create_pool(&request).unwrap(),
            vec![
                U256::zero(),
                U256::from(0x6869u64),
                U256::from(2u64),
                U256::from(5u64),
                U256::one(),
                U256::from(255u64),
            ]
        );

        let bad = CreatePoolRequest {
            recipient: "0xNOTHEX".to_string(),
            ..request
        };
        assert!(matches!(
            encode_create_pool(&bad),
            Err(ContractError::InvalidCalldata(_))
        ));
    }

    #[test]
    fn test_encode_contribute() {
        let request = ContributionRequest {
            pool_id: PoolId(12),
            amount: U256::from(1_500_000_000_000_000_000u64),
        };
        assert_eq!(
            encode_contribute(&request),
            vec![
                U256::from(12u64),
                U256::from(1_500_000_000_000_000_000u64),
                U256::zero(),
            ]
        );
    }
}
