use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::codec::NumberFormat;
use crate::shared::types::TokenInfo;

/// Local starknet-devnet endpoint.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:5050/rpc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RpcCfg {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for RpcCfg {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractCfg {
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountCfg {
    /// Connected account; receives the funds of pools it creates.
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc: RpcCfg,
    pub contract: ContractCfg,
    pub account: AccountCfg,
    pub token: TokenInfo,
    pub display: NumberFormat,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).context("parse Pooler.toml")?;
        Ok(cfg)
    }
}
