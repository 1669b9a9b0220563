//! ERC20 token console.
//!
//! Subcommands:
//! - `info`: read token name, symbol, and balance once and print the panel
//! - `transfer`: submit an ERC20 transfer against the configured contract
//! - `approve`: submit an ERC20 approval
//! - `watch`: reload token info on an interval, exporting metrics

use clap::{Parser, Subcommand};
use console::{build_panel, config::Config, load_registry, metrics::Metrics};
use metrics_exporter_prometheus::PrometheusBuilder;
use panel::format_token_amount;
use std::time::{Duration, Instant};
use token::{
    reader::RpcTokenReader,
    writer::{Unsigned, WalletTokenWriter},
};
use tokio::time;
use tracing::{info, warn};
use transactor::Transactor;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "View an ERC20 token and submit transfers/approvals")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY")]
    private_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read token info once and print the panel
    Info,

    /// Transfer tokens to a recipient
    Transfer {
        /// Recipient address
        #[arg(long)]
        to: String,

        /// Amount in whole tokens (decimal)
        #[arg(long)]
        amount: String,
    },

    /// Approve a spender for an amount
    Approve {
        /// Spender address
        #[arg(long)]
        spender: String,

        /// Amount in whole tokens (decimal)
        #[arg(long)]
        amount: String,
    },

    /// Reload token info on an interval
    Watch {
        /// Seconds between reloads
        #[arg(long, default_value_t = 30)]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let registry = load_registry(&config)?;
    let metrics = Metrics::new();

    info!("Loaded config:");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Chain id: {}", config.chain_id);
    if let Some(network) = config.network() {
        info!("  Network: {}", network.name);
    }
    info!("  Contract: {}", config.contract);

    if registry.lookup(config.chain_id, &config.contract).is_none() {
        warn!(
            chain_id = config.chain_id,
            contract = %config.contract,
            deployed_chains = ?registry.chains().collect::<Vec<_>>(),
            "No deployment for the configured chain; only the loading placeholder will render"
        );
    }

    match cli.command {
        Command::Info => {
            let provider = client::create_provider(&config.rpc_url)?;
            let reader = RpcTokenReader::new(provider);
            let mut panel = build_panel(reader, Unsigned, registry, &config, None);

            let started = Instant::now();
            panel.reload().await;
            metrics.record_reload(started.elapsed(), panel.view().last_error.is_some());

            println!("{}", panel.render());
        }
        Command::Transfer { to, amount } => {
            let private_key = require_private_key(cli.private_key.as_deref())?;
            let signer = client::signer_address(private_key)?;
            let provider = client::create_wallet_provider(&config.rpc_url, private_key)?;

            let reader = RpcTokenReader::new(provider.clone());
            let writer = WalletTokenWriter::new(provider, Transactor::new());
            let mut panel = build_panel(reader, writer, registry, &config, Some(signer));

            panel.forms_mut().recipient = to;
            panel.forms_mut().amount = amount;

            if !panel.forms().transfer_ready() {
                warn!("Transfer disabled: recipient must be a valid address and amount a decimal token amount");
                return Ok(());
            }

            let outcome = panel.submit_transfer().await;
            metrics.record_transaction("transfer", outcome.is_some());

            match outcome {
                Some(tx_hash) => {
                    info!(tx_hash = %tx_hash, "Transfer confirmed");
                    panel.reload().await;
                    println!("{}", panel.render());
                }
                None => warn!(error = ?panel.view().last_error, "Transfer not submitted"),
            }
        }
        Command::Approve { spender, amount } => {
            let private_key = require_private_key(cli.private_key.as_deref())?;
            let signer = client::signer_address(private_key)?;
            let provider = client::create_wallet_provider(&config.rpc_url, private_key)?;

            let reader = RpcTokenReader::new(provider.clone());
            let writer = WalletTokenWriter::new(provider, Transactor::new());
            let mut panel = build_panel(reader, writer, registry, &config, Some(signer));

            panel.forms_mut().spender = spender;
            panel.forms_mut().amount = amount;

            if !panel.forms().approve_ready() {
                warn!("Approve disabled: spender must be a valid address and amount a decimal token amount");
                return Ok(());
            }

            let outcome = panel.submit_approve().await;
            metrics.record_transaction("approve", outcome.is_some());

            match outcome {
                Some(tx_hash) => {
                    info!(tx_hash = %tx_hash, "Approval confirmed");
                    panel.reload().await;
                    println!("{}", panel.render());
                }
                None => warn!(error = ?panel.view().last_error, "Approval not submitted"),
            }
        }
        Command::Watch { interval_secs } => {
            if let Some(addr) = config.metrics_addr {
                PrometheusBuilder::new().with_http_listener(addr).install()?;
                info!(address = %addr, "Prometheus exporter listening");
            }

            let provider = client::create_provider(&config.rpc_url)?;
            let reader = RpcTokenReader::new(provider);
            let mut panel = build_panel(reader, Unsigned, registry, &config, None);

            info!("Starting watch loop...");
            let mut interval = time::interval(Duration::from_secs(interval_secs));

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutting down");
                        break;
                    }
                }

                let started = Instant::now();
                panel.reload().await;
                let failed = panel.view().last_error.is_some();
                metrics.record_reload(started.elapsed(), failed);

                let view = panel.view();
                match &view.last_error {
                    Some(error) => warn!(error = %error, "Reload failed"),
                    None => info!(
                        token = %format!("{} ({})", view.name, view.symbol),
                        balance = %format_token_amount(view.balance),
                        "Token info reloaded"
                    ),
                }
            }
        }
    }

    Ok(())
}

fn require_private_key(private_key: Option<&str>) -> eyre::Result<&str> {
    private_key.ok_or_else(|| {
        eyre::eyre!("this command signs a transaction: pass --private-key or set PRIVATE_KEY")
    })
}
