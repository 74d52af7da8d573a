// Associated token account lookup

use anyhow::Result;
use clap::Args;
use launchpad_sdk::{instructions::associated_token_address, utils::parse_pubkey, Wallet};
use solana_sdk::pubkey::Pubkey;

use super::utils::info;

#[derive(Args, Debug)]
pub struct AddressCmd {
    /// Mint address
    #[arg(long)]
    pub mint: String,

    /// Owner address (defaults to the connected wallet)
    #[arg(long)]
    pub owner: Option<String>,
}

/// Resolve the associated account without touching the network
pub fn resolve(cmd: &AddressCmd, wallet: &dyn Wallet) -> Result<(Pubkey, Pubkey)> {
    let mint = parse_pubkey(&cmd.mint)?;
    let owner = match &cmd.owner {
        Some(owner) => parse_pubkey(owner)?,
        None => wallet
            .public_key()
            .ok_or_else(|| anyhow::anyhow!("Must provide --owner or connect a wallet"))?,
    };
    Ok((owner, associated_token_address(&owner, &mint)))
}

pub fn execute(cmd: AddressCmd, wallet: &dyn Wallet) -> Result<()> {
    let (owner, account) = resolve(&cmd, wallet)?;
    info(&format!("Owner: {}", owner));
    info(&format!("Mint: {}", cmd.mint.trim()));
    println!("{}", account);
    Ok(())
}
