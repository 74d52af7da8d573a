use std::sync::Arc;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};

use crate::{constants::DEVNET_RPC_URL, errors::LaunchResult};

/// Network handle the launcher reads rent and blockhashes from and submits through
#[async_trait]
pub trait Connection: Send + Sync {
    /// Minimum balance for an account of `data_len` bytes to be rent exempt
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> LaunchResult<u64>;

    async fn get_latest_blockhash(&self) -> LaunchResult<Hash>;

    /// Submit a fully signed transaction
    async fn send_transaction(&self, transaction: &Transaction) -> LaunchResult<Signature>;
}

/// RPC-backed connection
pub struct RpcConnection {
    rpc: Arc<RpcClient>,
}

impl RpcConnection {
    pub fn new(rpc_url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: Arc::new(RpcClient::new_with_commitment(rpc_url.into(), commitment)),
        }
    }

    /// Devnet with `confirmed` commitment
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC_URL, CommitmentConfig::confirmed())
    }

    /// Get the RPC endpoint URL
    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Get account balance in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> LaunchResult<u64> {
        Ok(self.rpc.get_balance(pubkey).await?)
    }
}

#[async_trait]
impl Connection for RpcConnection {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> LaunchResult<u64> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn get_latest_blockhash(&self) -> LaunchResult<Hash> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LaunchResult<Signature> {
        // Returns once the transaction reached the client's commitment
        Ok(self.rpc.send_and_confirm_transaction(transaction).await?)
    }
}
