// Wallet status command

use anyhow::{Context, Result};
use launchpad_sdk::{Wallet, WALLET_NOT_CONNECTED_NOTICE};

use super::utils::{format_sol, info, success, warn};
use crate::shell::Shell;

pub async fn execute(shell: &Shell) -> Result<()> {
    info(&format!("RPC URL: {}", shell.connection.rpc_url()));

    let Some(owner) = shell.wallet.public_key().filter(|_| shell.wallet.connected()) else {
        warn(WALLET_NOT_CONNECTED_NOTICE);
        return Ok(());
    };

    success(&format!("Wallet connected: {}", owner));
    let balance = shell
        .connection
        .get_balance(&owner)
        .await
        .context("Failed to fetch wallet balance")?;
    info(&format!("Balance: {} SOL", format_sol(balance)));

    Ok(())
}
