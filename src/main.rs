use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pooler::app::{self, AppCfg, Command};
use pooler::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Group savings pools on Starknet")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Starknet JSON-RPC endpoint (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Pooler contract address (overrides config)
    #[arg(long)]
    contract: Option<String>,

    /// Connected account address (overrides config)
    #[arg(long)]
    account: Option<String>,

    /// Token decimals (overrides config)
    #[arg(long)]
    decimals: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    // Priority: CLI args > Config file > Defaults
    let base_config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    let mut app_cfg = AppCfg::from_config(base_config);

    if let Some(rpc_url) = args.rpc_url {
        app_cfg.rpc_url = rpc_url;
    }
    if let Some(contract) = args.contract {
        app_cfg.contract_address = Some(contract);
    }
    if let Some(account) = args.account {
        app_cfg.account_address = Some(account);
    }
    if let Some(decimals) = args.decimals {
        app_cfg.token.decimals = decimals;
    }

    app::run(app_cfg, args.command).await
}
