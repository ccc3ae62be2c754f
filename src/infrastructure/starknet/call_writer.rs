//! Builds invoke payloads for the Pooler write entry points
//!
//! Signing belongs to the user's wallet, so the writer stops at the exact
//! call a wallet would sign and hands it back unsubmitted.

use async_trait::async_trait;
use chrono::Utc;
use primitive_types::U256;
use tracing::info;

use super::felt::{felt_to_hex, selector};
use super::pooler_abi::{encode_contribute, encode_create_pool, CONTRIBUTE, CREATE_POOL};
use crate::domain::contract::{
    ContributionRequest, CreatePoolRequest, InvokeCall, PoolWriter, TransactionResult,
};
use crate::shared::errors::ContractError;

pub struct UnsignedCallWriter {
    contract_address: String,
}

impl UnsignedCallWriter {
    pub fn new(contract_address: String) -> Self {
        Self { contract_address }
    }

    fn invoke(&self, entry_point: &str, calldata: Vec<U256>) -> InvokeCall {
        InvokeCall {
            contract_address: self.contract_address.clone(),
            entry_point: entry_point.to_string(),
            selector: felt_to_hex(selector(entry_point)),
            calldata: calldata.into_iter().map(felt_to_hex).collect(),
        }
    }

    fn prepared(call: InvokeCall) -> TransactionResult {
        info!(
            "Prepared {} call with {} calldata felts",
            call.entry_point,
            call.calldata.len()
        );
        TransactionResult {
            calls: vec![call],
            transaction_hash: None,
            prepared_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PoolWriter for UnsignedCallWriter {
    async fn create_pool(
        &self,
        request: &CreatePoolRequest,
    ) -> Result<TransactionResult, ContractError> {
        let calldata = encode_create_pool(request)?;
        Ok(Self::prepared(self.invoke(CREATE_POOL, calldata)))
    }

    async fn contribute(
        &self,
        request: &ContributionRequest,
    ) -> Result<TransactionResult, ContractError> {
        let calldata = encode_contribute(request);
        Ok(Self::prepared(self.invoke(CONTRIBUTE, calldata)))
    }
}
