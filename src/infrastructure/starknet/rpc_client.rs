//! Starknet JSON-RPC client for read-only contract calls

use async_trait::async_trait;
use primitive_types::U256;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::felt::{felt_to_hex, parse_felt, selector};
use super::pooler_abi::{decode_pool, encode_get_pool, GET_POOL};
use crate::domain::contract::PoolReader;
use crate::domain::pool::{Pool, PoolId};
use crate::shared::errors::ContractError;
use crate::shared::utils::generate_id;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<P> {
    jsonrpc: &'static str,
    id: String,
    method: &'static str,
    params: P,
}

#[derive(Debug, Serialize)]
struct CallParams {
    request: FunctionCall,
    block_id: &'static str,
}

#[derive(Debug, Serialize)]
struct FunctionCall {
    contract_address: String,
    entry_point_selector: String,
    calldata: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

fn call_request(
    contract_address: &str,
    entry_point: &str,
    calldata: &[U256],
) -> JsonRpcRequest<CallParams> {
    JsonRpcRequest {
        jsonrpc: "2.0",
        id: generate_id(),
        method: "starknet_call",
        params: CallParams {
            request: FunctionCall {
                contract_address: contract_address.to_string(),
                entry_point_selector: felt_to_hex(selector(entry_point)),
                calldata: calldata.iter().copied().map(felt_to_hex).collect(),
            },
            block_id: "latest",
        },
    }
}

fn parse_call_response(response: JsonRpcResponse<Vec<String>>) -> Result<Vec<U256>, ContractError> {
    if let Some(error) = response.error {
        let message = match error.data {
            Some(data) => format!("{} ({})", error.message, data),
            None => error.message,
        };
        return Err(ContractError::Rpc {
            code: error.code,
            message,
        });
    }
    response
        .result
        .ok_or_else(|| ContractError::Decode("response has neither result nor error".to_string()))?
        .iter()
        .map(|felt| parse_felt(felt))
        .collect()
}

/// Thin JSON-RPC client for a Starknet node
pub struct StarknetRpcClient {
    http: Client,
    url: String,
}

impl StarknetRpcClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ContractError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Execute `entry_point` on `contract_address` against the latest block.
    pub async fn call(
        &self,
        contract_address: &str,
        entry_point: &str,
        calldata: &[U256],
    ) -> Result<Vec<U256>, ContractError> {
        let request = call_request(contract_address, entry_point, calldata);
        debug!("starknet_call {} on {} ({})", entry_point, contract_address, request.id);

        let response: JsonRpcResponse<Vec<String>> = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_call_response(response)
    }
}

/// Reads pools from a deployed Pooler contract over JSON-RPC
pub struct RpcPoolReader {
    client: StarknetRpcClient,
    contract_address: String,
}

impl RpcPoolReader {
    pub fn new(client: StarknetRpcClient, contract_address: String) -> Self {
        Self {
            client,
            contract_address,
        }
    }
}

#[async_trait]
impl PoolReader for RpcPoolReader {
    async fn read_pool(&self, pool_id: PoolId) -> Result<Pool, ContractError> {
        info!("Fetching pool {} from {}", pool_id, self.client.url());
        let felts = self
            .client
            .call(&self.contract_address, GET_POOL, &encode_get_pool(pool_id))
            .await?;
        decode_pool(&felts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_request_shape() {
        let request = call_request("0x123", GET_POOL, &[U256::from(7u64)]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["method"], "starknet_call");
        assert_eq!(json["params"]["block_id"], "latest");
        assert_eq!(json["params"]["request"]["contract_address"], "0x123");
        assert_eq!(json["params"]["request"]["calldata"], serde_json::json!(["0x7"]));
        assert_eq!(
            json["params"]["request"]["entry_point_selector"],
            felt_to_hex(selector("get_pool"))
        );
    }

    #[test]
    fn test_parse_result() {
        let response: JsonRpcResponse<Vec<String>> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"1","result":["0x0","0x1f","0xA"]}"#)
                .unwrap();
        assert_eq!(
            parse_call_response(response).unwrap(),
            vec![U256::zero(), U256::from(31u64), U256::from(10u64)]
        );
    }

    #[test]
    fn test_parse_error() {
        let response: JsonRpcResponse<Vec<String>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":"1","error":{"code":40,"message":"Contract error","data":"pool not found"}}"#,
        )
        .unwrap();
        assert_eq!(
            parse_call_response(response),
            Err(ContractError::Rpc {
                code: 40,
                message: "Contract error (\"pool not found\")".to_string()
            })
        );
    }

    #[test]
    fn test_parse_malformed_felt() {
        let response: JsonRpcResponse<Vec<String>> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"1","result":["12"]}"#).unwrap();
        assert!(matches!(
            parse_call_response(response),
            Err(ContractError::Decode(_))
        ));

        let empty: JsonRpcResponse<Vec<String>> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"1"}"#).unwrap();
        assert!(matches!(parse_call_response(empty), Err(ContractError::Decode(_))));
    }
}
