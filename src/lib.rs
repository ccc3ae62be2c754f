//! Pooler - group savings pools on Starknet
//! Built with Domain-Driven Design principles

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::{PoolService, Shell};
pub use domain::codec::AmountCodec;
pub use domain::pool::{Pool, PoolId, PoolViewState};
pub use domain::view::{PageState, View};
pub use shared::errors::{AppError, CodecError, ContractError, PoolError};
