//! Which pool is being viewed, and where its fetch stands

use tracing::debug;

use super::{is_complete, progress_ratio, Pool, PoolId};
use crate::domain::codec::AmountCodec;
use crate::shared::errors::ContractError;

/// Lifecycle of the pool lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching { pool_id: PoolId },
    Ready { pool_id: PoolId, pool: Pool },
    Failed { pool_id: PoolId, error: String },
}

/// Holds the active fetch key and the last result for it.
#[derive(Debug, Clone, Default)]
pub struct PoolViewState {
    state: FetchState,
}

impl PoolViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `input` as the active fetch key if it is all digits.
    ///
    /// Returns the key to fetch, or `None` when the input was rejected, in
    /// which case the previous key and state are left as they were.
    pub fn set_pool_identifier(&mut self, input: &str) -> Option<PoolId> {
        match input.parse::<PoolId>() {
            Ok(pool_id) => {
                self.state = FetchState::Fetching { pool_id };
                Some(pool_id)
            }
            Err(err) => {
                debug!("Ignoring pool identifier: {}", err);
                None
            }
        }
    }

    /// Record the outcome of a fetch. Results for a key that is no longer
    /// being fetched are dropped and `false` is returned.
    pub fn resolve(&mut self, pool_id: PoolId, result: Result<Pool, ContractError>) -> bool {
        if self.state != (FetchState::Fetching { pool_id }) {
            debug!("Dropping stale result for pool {}", pool_id);
            return false;
        }
        self.state = match result {
            Ok(pool) => FetchState::Ready { pool_id, pool },
            Err(err) => FetchState::Failed {
                pool_id,
                error: err.to_string(),
            },
        };
        true
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn active_pool_id(&self) -> Option<PoolId> {
        match &self.state {
            FetchState::Idle => None,
            FetchState::Fetching { pool_id }
            | FetchState::Ready { pool_id, .. }
            | FetchState::Failed { pool_id, .. } => Some(*pool_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Fetching { .. })
    }

    pub fn pool(&self) -> Option<&Pool> {
        match &self.state {
            FetchState::Ready { pool, .. } => Some(pool),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> Option<bool> {
        self.pool().map(is_complete)
    }

    pub fn progress_ratio(&self) -> Option<f64> {
        self.pool().map(progress_ratio)
    }

    /// A contribution amount is valid when it converts to a non-zero number
    /// of base units.
    pub fn amount_valid(codec: &AmountCodec, input: &str) -> bool {
        codec
            .to_base_units(input)
            .map(|units| !units.is_zero())
            .unwrap_or(false)
    }
}
