use std::{fs, path::Path, str::FromStr};

use launchpad_sdk::{
    utils::{cluster_url, expand_tilde},
    LaunchOptions, MintKeyStore, DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS, DEVNET_RPC_URL,
};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::error::{LaunchpadError, LaunchpadResult};

/// Launchpad configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Cluster RPC endpoint or moniker (devnet, mainnet-beta, localnet)
    pub rpc_url: String,

    /// Commitment level: processed, confirmed or finalized
    pub commitment: String,

    /// Wallet keypair file; none means no wallet is connected
    pub wallet_path: Option<String>,

    /// Decimal places of launched mints
    pub decimals: u8,

    /// Base units minted when no supply is entered
    pub default_supply_base_units: u64,

    /// Make the wallet the freeze authority of launched mints
    pub freeze_authority: bool,

    /// Directory mint keypairs are saved to before submission
    pub mint_key_dir: Option<String>,
}

impl LaunchpadConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> LaunchpadResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LaunchpadError::ConfigFile(format!("Failed to read config file {}: {}", path, e))
        })?;

        let config: LaunchpadConfig = toml::from_str(&content).map_err(|e| {
            LaunchpadError::SerializationError(format!(
                "Failed to parse config file {}: {}",
                path, e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise
    pub fn load_or_default(path: &str) -> LaunchpadResult<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            log::debug!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> LaunchpadResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            LaunchpadError::ConfigFile(format!("Failed to write config file {}: {}", path, e))
        })?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> LaunchpadResult<()> {
        if self.rpc_url.is_empty() {
            return Err(LaunchpadError::InvalidConfig(
                "rpc_url must not be empty".to_string(),
            ));
        }

        self.commitment_config()?;

        // 10^19 no longer fits in u64
        if self.decimals > 18 {
            return Err(LaunchpadError::InvalidConfig(format!(
                "decimals is {}, at most 18 allowed",
                self.decimals
            )));
        }

        if self.default_supply_base_units == 0 {
            return Err(LaunchpadError::InvalidConfig(
                "default_supply_base_units must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// RPC endpoint, with cluster monikers like `devnet` resolved
    pub fn cluster_url(&self) -> String {
        cluster_url(&self.rpc_url)
    }

    pub fn commitment_config(&self) -> LaunchpadResult<CommitmentConfig> {
        CommitmentConfig::from_str(&self.commitment).map_err(|_| {
            LaunchpadError::InvalidConfig(format!(
                "commitment {:?} is not one of processed, confirmed, finalized",
                self.commitment
            ))
        })
    }

    /// Launch options derived from this configuration
    pub fn launch_options(&self) -> LaunchpadResult<LaunchOptions> {
        let mint_key_store = match &self.mint_key_dir {
            Some(dir) => MintKeyStore::Directory(
                expand_tilde(dir)
                    .map_err(|e| LaunchpadError::InvalidConfig(e.to_string()))?
                    .into(),
            ),
            None => MintKeyStore::Discard,
        };

        Ok(LaunchOptions {
            freeze_authority: self.freeze_authority,
            mint_key_store,
        })
    }
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEVNET_RPC_URL.to_string(),
            commitment: "confirmed".to_string(),
            wallet_path: None,
            decimals: DEFAULT_DECIMALS,
            default_supply_base_units: DEFAULT_SUPPLY_BASE_UNITS,
            freeze_authority: true,
            mint_key_dir: Some("mint-keys".to_string()),
        }
    }
}

/// Create example configuration file
pub fn create_example_config(path: &str) -> LaunchpadResult<()> {
    let example_config = LaunchpadConfig {
        wallet_path: Some("~/.config/solana/id.json".to_string()),
        ..LaunchpadConfig::default()
    };

    example_config.save(path)?;
    Ok(())
}
