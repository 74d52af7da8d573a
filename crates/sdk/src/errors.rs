//! SDK error types

use solana_sdk::{program_error::ProgramError, pubkey::Pubkey, signer::SignerError};
use thiserror::Error;

use crate::types::LaunchStep;

/// Launchpad error type
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No wallet is connected, nothing was sent
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Form input rejected before any network call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Supply could not be converted to base units
    #[error("Invalid supply: {0}")]
    InvalidSupply(String),

    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Instruction construction failed inside a program library
    #[error("Failed to build instruction: {0}")]
    Instruction(String),

    /// Signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Mint key could not be read or written
    #[error("Key store error: {0}")]
    KeyStore(String),

    /// A launch step failed; earlier steps may already be on-chain
    #[error("Step {step} failed for mint {mint}: {source}")]
    Step {
        step: LaunchStep,
        mint: Pubkey,
        #[source]
        source: Box<LaunchError>,
    },
}

impl LaunchError {
    /// Tag an error with the step it happened in
    pub fn at_step(self, step: LaunchStep, mint: Pubkey) -> Self {
        match self {
            // Already tagged errors keep their original step
            tagged @ LaunchError::Step { .. } => tagged,
            other => LaunchError::Step {
                step,
                mint,
                source: Box::new(other),
            },
        }
    }

    /// Step the launch stopped at, if any was attempted
    pub fn failed_step(&self) -> Option<LaunchStep> {
        match self {
            LaunchError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Underlying error with step tagging removed
    pub fn root_cause(&self) -> &LaunchError {
        match self {
            LaunchError::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<solana_client::client_error::ClientError> for LaunchError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        LaunchError::Rpc(err.to_string())
    }
}

impl From<ProgramError> for LaunchError {
    fn from(err: ProgramError) -> Self {
        LaunchError::Instruction(err.to_string())
    }
}

impl From<SignerError> for LaunchError {
    fn from(err: SignerError) -> Self {
        LaunchError::Signing(err.to_string())
    }
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        LaunchError::KeyStore(err.to_string())
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
