//! Application services and use cases

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::codec::AmountCodec;
use crate::domain::contract::{PoolReader, PoolWriter, TransactionResult};
use crate::domain::pool::{FetchState, Pool};
use crate::domain::view::PageState;
use crate::shared::errors::{AppError, ContractError, PoolError};

/// Drives the page state against the contract: one request in flight at a
/// time, no retries, form contents kept on failure.
pub struct PoolService {
    reader: Arc<dyn PoolReader>,
    writer: Arc<dyn PoolWriter>,
    codec: AmountCodec,
    account_address: Option<String>,
    page: PageState,
}

impl PoolService {
    pub fn new(
        reader: Arc<dyn PoolReader>,
        writer: Arc<dyn PoolWriter>,
        codec: AmountCodec,
        account_address: Option<String>,
    ) -> Self {
        Self {
            reader,
            writer,
            codec,
            account_address,
            page: PageState::new(),
        }
    }

    pub fn codec(&self) -> &AmountCodec {
        &self.codec
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    /// Fetch the pool named by `input`.
    ///
    /// Returns `Ok(None)` without touching the contract when the identifier
    /// is not all digits.
    pub async fn fetch_pool(&mut self, input: &str) -> Result<Option<Pool>, ContractError> {
        let Some(pool_id) = self.page.pool.set_pool_identifier(input) else {
            warn!("Pool identifier {:?} is not a number, not fetching", input);
            return Ok(None);
        };

        let result = self.reader.read_pool(pool_id).await;
        match &result {
            Ok(pool) => info!("Fetched pool {}: {:?}", pool_id, pool.description),
            Err(err) => error!("Failed to fetch pool {}: {}", pool_id, err),
        }
        self.page.pool.resolve(pool_id, result.clone());
        result.map(Some)
    }

    /// Submit the creation dialog's draft. The connected account is the
    /// pool's recipient.
    pub async fn create_pool(&mut self) -> Result<TransactionResult, AppError> {
        let request = self
            .page
            .create_dialog
            .begin_submit(&self.codec, self.account_address.clone())?;
        info!(
            "Creating pool {:?} with target {} base units",
            request.description,
            request.target.to_u256()
        );

        match self.writer.create_pool(&request).await {
            Ok(result) => {
                self.page.create_dialog.finish_submit(Ok(()));
                Ok(result)
            }
            Err(err) => {
                error!("create_pool failed: {}", err);
                self.page.create_dialog.finish_submit(Err(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Contribute the form's amount to the pool currently on screen.
    pub async fn contribute(&mut self) -> Result<TransactionResult, AppError> {
        let pool_id = match self.page.pool.state() {
            FetchState::Ready { pool_id, .. } => *pool_id,
            _ => return Err(PoolError::NoPoolSelected.into()),
        };
        let request = self.page.contribute.begin_submit(pool_id, &self.codec)?;
        info!("Contributing {} base units to pool {}", request.amount, pool_id);

        match self.writer.contribute(&request).await {
            Ok(result) => {
                self.page.contribute.finish_submit(Ok(()));
                Ok(result)
            }
            Err(err) => {
                error!("contribute failed: {}", err);
                self.page.contribute.finish_submit(Err(err.to_string()));
                Err(err.into())
            }
        }
    }
}
