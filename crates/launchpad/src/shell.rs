//! Wires configuration, connection and wallet together for the commands

use anyhow::{Context, Result};
use launchpad_sdk::{DisconnectedWallet, KeypairWallet, RpcConnection, Wallet};

use crate::{cli::Cli, config::LaunchpadConfig};

pub struct Shell {
    pub config: LaunchpadConfig,
    pub connection: RpcConnection,
    pub wallet: Box<dyn Wallet>,
}

impl Shell {
    pub fn connect(cli: &Cli) -> Result<Self> {
        let config = resolve_config(cli)?;
        let connection = RpcConnection::new(config.cluster_url(), config.commitment_config()?);
        let wallet = connect_wallet(config.wallet_path.as_deref())?;

        Ok(Self {
            config,
            connection,
            wallet,
        })
    }
}

/// Config file values with command line overrides applied
pub fn resolve_config(cli: &Cli) -> Result<LaunchpadConfig> {
    let mut config = LaunchpadConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config))?;

    if let Some(rpc_url) = &cli.rpc_url {
        config.rpc_url = rpc_url.clone();
    }
    if let Some(wallet) = &cli.wallet {
        config.wallet_path = Some(wallet.clone());
    }

    config.validate()?;
    Ok(config)
}

/// A keypair path connects a wallet; no path leaves it disconnected
pub fn connect_wallet(path: Option<&str>) -> Result<Box<dyn Wallet>> {
    match path {
        Some(path) => {
            let wallet = KeypairWallet::from_file(path).context("Failed to connect wallet")?;
            log::info!("Wallet connected: {}", wallet.pubkey());
            Ok(Box::new(wallet))
        }
        None => {
            log::debug!("No wallet keypair configured");
            Ok(Box::new(DisconnectedWallet))
        }
    }
}
