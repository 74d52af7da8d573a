use std::{fs, path::Path, str::FromStr};

use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, write_keypair_file, Keypair},
};

use crate::{
    constants::{DEVNET_RPC_URL, LOCALNET_RPC_URL, MAINNET_RPC_URL},
    errors::{LaunchError, LaunchResult},
};

/// Expand a bare `~` or a leading `~/` to the home directory.
/// Other users' homes (`~name/...`) are left untouched.
pub fn expand_tilde(path: &str) -> LaunchResult<String> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(path.to_string()),
    };
    let home = std::env::var("HOME")
        .map_err(|_| LaunchError::KeyStore("HOME environment variable not set".to_string()))?;
    Ok(format!("{home}{rest}"))
}

/// Resolve a cluster moniker to its RPC endpoint; anything else is taken as a URL
pub fn cluster_url(moniker_or_url: &str) -> String {
    match moniker_or_url.trim() {
        "devnet" | "d" => DEVNET_RPC_URL.to_string(),
        "mainnet-beta" | "mainnet" | "m" => MAINNET_RPC_URL.to_string(),
        "localhost" | "localnet" | "l" => LOCALNET_RPC_URL.to_string(),
        url => url.to_string(),
    }
}

/// Load a keypair file (Solana CLI JSON format), expanding ~ if needed
pub fn load_keypair(path: &str) -> LaunchResult<Keypair> {
    let expanded_path = expand_tilde(path)?;
    read_keypair_file(&expanded_path).map_err(|e| {
        LaunchError::KeyStore(format!("Failed to load keypair from {}: {}", expanded_path, e))
    })
}

/// Write a keypair file, creating parent directories. Existing files are never overwritten.
pub fn persist_keypair(keypair: &Keypair, path: &Path) -> LaunchResult<()> {
    if path.exists() {
        return Err(LaunchError::KeyStore(format!(
            "Refusing to overwrite existing key file {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_keypair_file(keypair, path).map_err(|e| {
        LaunchError::KeyStore(format!("Failed to write keypair to {}: {}", path.display(), e))
    })?;
    Ok(())
}

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> LaunchResult<Pubkey> {
    Pubkey::from_str(s.trim())
        .map_err(|e| LaunchError::InvalidInput(format!("Invalid public key {s:?}: {e}")))
}
