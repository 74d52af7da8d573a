use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(name = "token-launchpad")]
#[command(about = "Launch Token-2022 tokens with on-chain metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to launchpad configuration file
    #[arg(short, long, default_value = "launchpad.toml")]
    pub config: String,

    /// RPC URL or cluster moniker to connect to (overrides the config file)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Path to wallet keypair file; without one no wallet is connected
    #[arg(long)]
    pub wallet: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a token: mint with metadata, associated account and initial supply
    Create(commands::create::CreateCmd),

    /// Show wallet connection status and balance
    Wallet,

    /// Print the associated token account for a mint
    Address(commands::address::AddressCmd),

    /// Write an example configuration file
    InitConfig {
        /// Output path
        #[arg(long, default_value = "launchpad.toml")]
        path: String,
    },
}
