// CLI tool for launching Token-2022 tokens
//
// Loads the configuration and wallet, then runs the requested command.

use anyhow::Result;
use clap::Parser;

use token_launchpad::{commands, create_example_config, Cli, Commands, Shell};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "info" }),
    )
    .init();

    if let Commands::InitConfig { path } = &cli.command {
        create_example_config(path)?;
        commands::utils::success(&format!("Configuration written to {}", path));
        return Ok(());
    }

    let shell = Shell::connect(&cli)?;
    log::debug!("RPC URL: {}", shell.config.rpc_url);

    match cli.command {
        Commands::Create(cmd) => commands::create::execute(cmd, &shell).await,
        Commands::Wallet => commands::wallet::execute(&shell).await,
        Commands::Address(cmd) => commands::address::execute(cmd, shell.wallet.as_ref()),
        Commands::InitConfig { .. } => Ok(()),
    }
}
