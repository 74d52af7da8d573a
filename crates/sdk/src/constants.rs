//! Launchpad constants

/// Default cluster endpoint
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const LOCALNET_RPC_URL: &str = "http://localhost:8899";

/// Decimal places of every launched mint
pub const DEFAULT_DECIMALS: u8 = 9;

/// Base units minted when no supply is entered (1 token at 9 decimals)
pub const DEFAULT_SUPPLY_BASE_UNITS: u64 = 1_000_000_000;

/// TLV entry header: extension type (u16) followed by length (u16)
pub const TYPE_SIZE: usize = 2;
pub const LENGTH_SIZE: usize = 2;
pub const TLV_HEADER_LEN: usize = TYPE_SIZE + LENGTH_SIZE;

/// Conventional metadata field limits
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

/// Shown when a launch is attempted without a wallet
pub const WALLET_NOT_CONNECTED_NOTICE: &str = "Wallet not connected, please connect your wallet.";
