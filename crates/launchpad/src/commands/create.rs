// Token creation command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use launchpad_sdk::{
    Connection, LaunchError, LaunchReceipt, MintKeyStore, TokenForm, TokenLauncher, Wallet,
    WALLET_NOT_CONNECTED_NOTICE,
};

use super::utils::{format_sol, info, success, warn};
use crate::{config::LaunchpadConfig, shell::Shell};

#[derive(Args, Debug)]
pub struct CreateCmd {
    /// Token name
    #[arg(long)]
    pub name: String,

    /// Token symbol
    #[arg(long)]
    pub symbol: String,

    /// Image (metadata) URL
    #[arg(long)]
    pub image_url: String,

    /// Initial supply in whole tokens, e.g. 100 or 12.5 (defaults to the configured base units)
    #[arg(long)]
    pub supply: Option<String>,

    /// Save the mint keypair to this file instead of the configured key directory
    #[arg(long)]
    pub mint_keypair_out: Option<PathBuf>,

    /// Do not set the wallet as freeze authority
    #[arg(long)]
    pub no_freeze_authority: bool,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,
}

impl CreateCmd {
    pub fn form(&self) -> TokenForm {
        TokenForm {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            image_url: self.image_url.clone(),
            supply: self.supply.clone(),
        }
    }
}

/// Result of the create command
#[derive(Debug)]
pub enum CreateOutcome {
    Launched(LaunchReceipt),
    WalletNotConnected,
}

/// Check the wallet, validate the form and run the launch
pub async fn launch(
    cmd: &CreateCmd,
    config: &LaunchpadConfig,
    wallet: &dyn Wallet,
    connection: &dyn Connection,
) -> Result<CreateOutcome> {
    let launcher = TokenLauncher::new(wallet, connection);
    // A missing wallet wins over any form problem
    if launcher.connected_owner().is_err() {
        return Ok(CreateOutcome::WalletNotConnected);
    }

    let params = cmd
        .form()
        .validate(config.decimals, config.default_supply_base_units)?;

    let mut options = config.launch_options()?;
    if let Some(path) = &cmd.mint_keypair_out {
        options.mint_key_store = MintKeyStore::File(path.clone());
    }
    if cmd.no_freeze_authority {
        options.freeze_authority = false;
    }

    let launcher = launcher.with_options(options);
    match launcher.launch(&params).await {
        Ok(receipt) => Ok(CreateOutcome::Launched(receipt)),
        Err(LaunchError::WalletNotConnected) => Ok(CreateOutcome::WalletNotConnected),
        Err(err) => Err(err.into()),
    }
}

pub async fn execute(cmd: CreateCmd, shell: &Shell) -> Result<()> {
    info(&format!(
        "Creating token {} ({}) on {}",
        cmd.name.trim(),
        cmd.symbol.trim(),
        shell.connection.rpc_url()
    ));

    match launch(&cmd, &shell.config, shell.wallet.as_ref(), &shell.connection).await {
        Ok(CreateOutcome::Launched(receipt)) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&receipt_json(&receipt))?);
            } else {
                print_receipt(&receipt);
            }
            Ok(())
        }
        Ok(CreateOutcome::WalletNotConnected) => {
            warn(WALLET_NOT_CONNECTED_NOTICE);
            Ok(())
        }
        Err(err) => {
            if let Some(LaunchError::Step { step, mint, .. }) = err.downcast_ref::<LaunchError>() {
                warn(&format!("Launch stopped at step {} for mint {}", step, mint));
            }
            Err(err)
        }
    }
}

fn print_receipt(receipt: &LaunchReceipt) {
    success(&format!("Token mint created at {}", receipt.mint.mint));
    info(&format!(
        "Mint account: {} bytes + {} metadata bytes, rent {} SOL",
        receipt.mint.mint_space,
        receipt.mint.metadata_space,
        format_sol(receipt.mint.rent_lamports)
    ));
    success(&format!(
        "Associated token account: {}",
        receipt.account.associated_account
    ));
    success(&format!(
        "Minted {} base units ({} decimals)",
        receipt.supply.amount, receipt.mint.decimals
    ));
    for (index, signature) in receipt.signatures().iter().enumerate() {
        info(&format!("[{}/3] {}", index + 1, signature));
    }
    if let Some(path) = receipt.mint_key_path() {
        info(&format!("Mint keypair: {}", path.display()));
    }
}

pub fn receipt_json(receipt: &LaunchReceipt) -> serde_json::Value {
    serde_json::json!({
        "mint": receipt.mint.mint.to_string(),
        "associatedAccount": receipt.account.associated_account.to_string(),
        "amount": receipt.supply.amount,
        "decimals": receipt.mint.decimals,
        "rentLamports": receipt.mint.rent_lamports,
        "signatures": receipt
            .signatures()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
        "mintKeypair": receipt.mint_key_path().map(|p| p.display().to_string()),
    })
}
