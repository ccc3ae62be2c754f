// src/app.rs
use anyhow::{anyhow, bail, Result};
use clap::Subcommand;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::application::services::PoolService;
use crate::application::shell::Shell;
use crate::config::Config;
use crate::domain::codec::{normalize_address, AmountCodec, NumberFormat};
use crate::domain::contract::TransactionResult;
use crate::infrastructure::starknet::{RpcPoolReader, StarknetRpcClient, UnsignedCallWriter};
use crate::report::PoolReport;
use crate::shared::types::TokenInfo;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read a pool from the contract
    GetPool {
        id: String,
        /// Print the pool as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prepare a create_pool call; the configured account is the recipient
    CreatePool {
        #[arg(long)]
        title: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        /// Target in whole tokens, e.g. 250.5
        #[arg(long)]
        target: String,
        #[arg(long)]
        emoji: Option<String>,
    },
    /// Prepare a contribute call for an existing pool
    Contribute { pool_id: String, amount: String },
    /// Run the display codecs without touching the network
    #[command(subcommand)]
    Format(FormatCommand),
    /// Interactive session on stdin
    Shell,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FormatCommand {
    /// Human amount to base units
    Units { value: String },
    /// Base units to a human amount
    Amount { value: String },
    /// Group an integer
    Integer { value: String },
    /// Normalize an address to 0x-hex
    Address { value: String },
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub rpc_url: String,
    pub rpc_timeout: Duration,
    pub contract_address: Option<String>,
    pub account_address: Option<String>,
    pub token: TokenInfo,
    pub display: NumberFormat,
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Self {
        Self {
            rpc_url: cfg.rpc.url,
            rpc_timeout: Duration::from_secs(cfg.rpc.timeout_secs),
            contract_address: cfg.contract.address,
            account_address: cfg.account.address,
            token: cfg.token,
            display: cfg.display,
        }
    }

    pub fn codec(&self) -> AmountCodec {
        AmountCodec::new(self.token.decimals, self.display.clone())
    }

    fn contract_address(&self) -> Result<String> {
        let address = self
            .contract_address
            .as_deref()
            .ok_or_else(|| anyhow!("contract address is required (--contract or [contract] address)"))?;
        Ok(normalize_address(address)?)
    }

    pub fn build_service(&self) -> Result<PoolService> {
        let contract_address = self.contract_address()?;
        let client = StarknetRpcClient::new(self.rpc_url.clone(), self.rpc_timeout)?;
        let reader = RpcPoolReader::new(client, contract_address.clone());
        let writer = UnsignedCallWriter::new(contract_address);

        Ok(PoolService::new(
            Arc::new(reader),
            Arc::new(writer),
            self.codec(),
            self.account_address.clone(),
        ))
    }
}

pub async fn run(app_cfg: AppCfg, command: Command) -> Result<()> {
    info!("Configuration: {:?}", app_cfg);

    match command {
        Command::Format(format) => {
            println!("{}", run_format(&app_cfg.codec(), format)?);
            Ok(())
        }
        Command::GetPool { id, json } => {
            let mut service = app_cfg.build_service()?;
            let Some(pool) = service.fetch_pool(&id).await? else {
                bail!("pool id must be a non-negative integer, got {id:?}");
            };
            let pool_id = service
                .page()
                .pool
                .active_pool_id()
                .ok_or_else(|| anyhow!("no active pool after fetch"))?;
            let report = PoolReport::new(pool_id, &pool, service.codec(), &app_cfg.token);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            Ok(())
        }
        Command::CreatePool {
            title,
            description,
            target,
            emoji,
        } => {
            let mut service = app_cfg.build_service()?;
            let dialog = &mut service.page_mut().create_dialog;
            dialog.open();
            if let Some(draft) = dialog.draft_mut() {
                draft.title = title.unwrap_or_default();
                draft.description = description;
                draft.target = target;
                if let Some(emoji) = emoji {
                    draft.set_emoji(&emoji)?;
                }
            }
            print_result(&service.create_pool().await?)
        }
        Command::Contribute { pool_id, amount } => {
            let mut service = app_cfg.build_service()?;
            service.page_mut().show_goals();
            if service.fetch_pool(&pool_id).await?.is_none() {
                bail!("pool id must be a non-negative integer, got {pool_id:?}");
            }
            service.page_mut().contribute.set_amount(&amount);
            print_result(&service.contribute().await?)
        }
        Command::Shell => {
            let service = app_cfg.build_service()?;
            let mut shell = Shell::new(service, app_cfg.token.clone());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell.run(stdin, tokio::io::stdout()).await
        }
    }
}

fn run_format(codec: &AmountCodec, command: FormatCommand) -> Result<String> {
    Ok(match command {
        FormatCommand::Units { value } => codec.to_base_units(&value)?.to_string(),
        FormatCommand::Amount { value } => codec.from_base_units(value),
        FormatCommand::Integer { value } => codec.format_integer(value),
        FormatCommand::Address { value } => normalize_address(value)?,
    })
}

fn print_result(result: &TransactionResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_cfg(toml: &str) -> AppCfg {
        AppCfg::from_config(Config::from_toml(toml).unwrap())
    }

    #[test]
    fn test_from_config() {
        let cfg = app_cfg(
            r#"
            [rpc]
            timeout_secs = 5

            [token]
            symbol = "ETH"
            decimals = 6
            "#,
        );
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(5));
        assert_eq!(cfg.codec().decimals(), 6);
        assert!(cfg.contract_address.is_none());
    }

    #[test]
    fn test_contract_address_required() {
        assert!(app_cfg("").build_service().is_err());

        let cfg = app_cfg("[contract]\naddress = \"4660\"\n");
        assert_eq!(cfg.contract_address().unwrap(), "0x1234");
    }

    #[test]
    fn test_format_commands() {
        let codec = AmountCodec::default();
        let run = |command| run_format(&codec, command).unwrap();

        assert_eq!(
            run(FormatCommand::Units { value: "1.5".to_string() }),
            "1500000000000000000"
        );
        assert_eq!(
            run(FormatCommand::Amount { value: "1234567890000000000000".to_string() }),
            "1,234.5679"
        );
        assert_eq!(run(FormatCommand::Integer { value: "1000000".to_string() }), "1,000,000");
        assert_eq!(run(FormatCommand::Address { value: "255".to_string() }), "0xff");
        assert!(run_format(&codec, FormatCommand::Units { value: "abc".to_string() }).is_err());
    }
}
