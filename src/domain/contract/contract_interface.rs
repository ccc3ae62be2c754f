//! Pooler contract interface traits

use async_trait::async_trait;

use super::{ContributionRequest, CreatePoolRequest, TransactionResult};
use crate::domain::pool::{Pool, PoolId};
use crate::shared::errors::ContractError;

/// Read side of the contract. Calls are idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoolReader: Send + Sync {
    async fn read_pool(&self, pool_id: PoolId) -> Result<Pool, ContractError>;
}

/// State-changing side of the contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoolWriter: Send + Sync {
    async fn create_pool(
        &self,
        request: &CreatePoolRequest,
    ) -> Result<TransactionResult, ContractError>;

    async fn contribute(
        &self,
        request: &ContributionRequest,
    ) -> Result<TransactionResult, ContractError>;
}
