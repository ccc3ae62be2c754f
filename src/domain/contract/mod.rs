//! Contract domain - the boundary to the Pooler contract

mod contract_interface;

pub use contract_interface::{PoolReader, PoolWriter};
#[cfg(test)]
pub use contract_interface::{MockPoolReader, MockPoolWriter};

use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::Serialize;

use super::codec::U256Split;
use super::pool::PoolId;

/// Arguments of `create_pool`, already encoded for the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePoolRequest {
    pub description: String,
    pub target: U256Split,
    pub recipient: String,
}

/// Arguments of `contribute`. The amount is in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRequest {
    pub pool_id: PoolId,
    pub amount: U256,
}

/// A single contract invocation, every felt rendered as `0x` hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvokeCall {
    pub contract_address: String,
    pub entry_point: String,
    pub selector: String,
    pub calldata: Vec<String>,
}

/// Outcome of a state-changing call.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResult {
    pub calls: Vec<InvokeCall>,
    /// Set once a signer has submitted the calls.
    pub transaction_hash: Option<String>,
    pub prepared_at: DateTime<Utc>,
}
