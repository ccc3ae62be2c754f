//! Error handling for the application

use thiserror::Error;

/// Amount and address codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount does not fit in 256 bits: {0}")]
    AmountOverflow(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// Pool-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid pool identifier: {0:?}")]
    InvalidPoolIdentifier(String),

    #[error("Invalid pool draft: {0}")]
    InvalidDraft(String),

    #[error("No pool selected")]
    NoPoolSelected,

    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

/// Contract call errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Contract call failed: {0}")]
    ContractCallFailed(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed contract response: {0}")]
    Decode(String),

    #[error("Invalid calldata: {0}")]
    InvalidCalldata(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl From<reqwest::Error> for ContractError {
    fn from(err: reqwest::Error) -> Self {
        ContractError::ContractCallFailed(err.to_string())
    }
}
