use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::Parser;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};
use whale_watchdog::config::Config;
use whale_watchdog::routers::RouterRegistry;
use whale_watchdog::rpc::{LogSource, RpcClient};
use whale_watchdog::token::{TokenConfig, fetch_token_metadata};
use whale_watchdog::watchdog::Watchdog;

#[derive(Parser)]
#[command(name = "watchdog")]
#[command(about = "Alert on large ERC-20 transfers into known DEX routers", long_about = None)]
struct Cli {
    /// ERC-20 token contract address to monitor
    token: String,

    /// Minimum transfer size, in human token units, that triggers an alert
    #[arg(long, default_value = "10000")]
    threshold: String,

    /// Seconds between chain head checks
    #[arg(long, default_value_t = 10)]
    poll_interval: u64,

    /// First block to monitor (defaults to the current chain head)
    #[arg(long)]
    start_block: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    let contract_address = Address::from_str(&cli.token)
        .with_context(|| format!("Invalid ERC-20 contract address: {}", cli.token))?;

    let config = Config::from_env()?;
    info!(
        "RPC URLs: {} endpoint(s) configured",
        config.json_rpc_urls.len()
    );

    let client = RpcClient::new(&config.json_rpc_urls)?;

    let metadata = fetch_token_metadata(&client, contract_address).await?;
    let token = TokenConfig::new(
        contract_address,
        metadata.decimals,
        metadata.symbol,
        &cli.threshold,
    )?;
    let routers = RouterRegistry::mainnet()?;

    let start_block = match cli.start_block {
        Some(block) => block,
        None => client
            .get_latest_block()
            .await
            .context("Failed to fetch the current chain head for the default start block")?,
    };

    let label = token.symbol.as_deref().unwrap_or("token");
    let unit = token.symbol.as_deref().unwrap_or("tokens");
    println!(
        "Watching {} transfers from block {}, threshold {} {}.",
        label, start_block, token.threshold_human, unit
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                // Dropping the sender also stops the loop.
                warn!("Failed to listen for interrupt: {}", e);
            }
        }
    });

    let mut watchdog = Watchdog::new(
        client,
        token,
        routers,
        Duration::from_secs(cli.poll_interval),
        start_block,
    );
    watchdog.run(shutdown_rx).await?;

    println!("Exiting whale watchdog.");
    Ok(())
}
