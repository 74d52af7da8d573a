//! Wallet capability passed to the launcher

use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    client::connection::Connection,
    errors::{LaunchError, LaunchResult},
    utils::load_keypair,
};

/// The signing side of a launch: connection status, public key and submission
#[async_trait]
pub trait Wallet: Send + Sync {
    fn connected(&self) -> bool;

    fn public_key(&self) -> Option<Pubkey>;

    /// Co-sign `transaction` and submit it through `connection`.
    ///
    /// Signatures already on the transaction are kept; a missing recent
    /// blockhash is filled in first.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        connection: &dyn Connection,
    ) -> LaunchResult<Signature>;
}

/// Wallet backed by a local keypair
pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load from a Solana CLI keypair file
    pub fn from_file(path: &str) -> LaunchResult<Self> {
        Ok(Self::new(load_keypair(path)?))
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

#[async_trait]
impl Wallet for KeypairWallet {
    fn connected(&self) -> bool {
        true
    }

    fn public_key(&self) -> Option<Pubkey> {
        Some(self.keypair.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        connection: &dyn Connection,
    ) -> LaunchResult<Signature> {
        if transaction.message.recent_blockhash == Hash::default() {
            transaction.message.recent_blockhash = connection.get_latest_blockhash().await?;
        }
        let blockhash = transaction.message.recent_blockhash;

        transaction.try_partial_sign(&[&self.keypair], blockhash)?;
        if !transaction.is_signed() {
            return Err(LaunchError::Signing(
                "transaction is missing required signatures".to_string(),
            ));
        }

        connection.send_transaction(&transaction).await
    }
}

/// No wallet selected
#[derive(Clone, Copy, Debug, Default)]
pub struct DisconnectedWallet;

#[async_trait]
impl Wallet for DisconnectedWallet {
    fn connected(&self) -> bool {
        false
    }

    fn public_key(&self) -> Option<Pubkey> {
        None
    }

    async fn send_transaction(
        &self,
        _transaction: Transaction,
        _connection: &dyn Connection,
    ) -> LaunchResult<Signature> {
        Err(LaunchError::WalletNotConnected)
    }
}
