//! Starknet bindings for the Pooler contract

pub mod call_writer;
pub mod felt;
pub mod pooler_abi;
pub mod rpc_client;

pub use call_writer::UnsignedCallWriter;
pub use rpc_client::{RpcPoolReader, StarknetRpcClient};
