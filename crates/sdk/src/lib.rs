//! Token Launchpad SDK
//!
//! Creates a fungible Token-2022 token from a connected wallet:
//! - mint account with a metadata pointer and on-chain metadata
//! - the wallet's associated token account
//! - the initial minted supply
pub mod client;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod testing;
pub mod types;
pub mod utils;

pub use client::*;
pub use constants::*;
pub use errors::*;
pub use types::*;
