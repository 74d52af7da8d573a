//! Testing utilities for the launchpad
//!
//! An in-memory `Connection` that records every call, so launch flows can be
//! checked without a cluster.

use std::sync::Mutex;

use async_trait::async_trait;
use solana_sdk::{hash::Hash, rent::Rent, signature::Signature, transaction::Transaction};

use crate::{
    client::connection::Connection,
    errors::{LaunchError, LaunchResult},
};

/// One recorded connection call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionCall {
    RentExemption(usize),
    LatestBlockhash,
    SendTransaction(Signature),
    /// A submission the mock was told to reject
    RejectedTransaction,
}

/// Recording connection with default rent and a fixed blockhash
pub struct MockConnection {
    blockhash: Hash,
    rent: Rent,
    /// Zero-based submission index to reject
    reject_submission: Option<usize>,
    calls: Mutex<Vec<ConnectionCall>>,
    sent: Mutex<Vec<Transaction>>,
}

impl Default for MockConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            rent: Rent::default(),
            reject_submission: None,
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Reject the `index`-th submission (zero-based) like an on-chain failure
    pub fn rejecting_submission(mut self, index: usize) -> Self {
        self.reject_submission = Some(index);
        self
    }

    pub fn blockhash(&self) -> Hash {
        self.blockhash
    }

    pub fn rent(&self) -> &Rent {
        &self.rent
    }

    pub fn calls(&self) -> Vec<ConnectionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Transactions accepted so far, in submission order
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, call: ConnectionCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> LaunchResult<u64> {
        self.record(ConnectionCall::RentExemption(data_len));
        Ok(self.rent.minimum_balance(data_len))
    }

    async fn get_latest_blockhash(&self) -> LaunchResult<Hash> {
        self.record(ConnectionCall::LatestBlockhash);
        Ok(self.blockhash)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LaunchResult<Signature> {
        let submission = self
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    ConnectionCall::SendTransaction(_) | ConnectionCall::RejectedTransaction
                )
            })
            .count();

        if self.reject_submission == Some(submission) {
            self.record(ConnectionCall::RejectedTransaction);
            return Err(LaunchError::Rpc(
                "Transaction simulation failed: Attempt to debit an account but found no record of a prior credit.".to_string(),
            ));
        }

        if transaction.verify().is_err() {
            return Err(LaunchError::Signing(
                "transaction signature verification failed".to_string(),
            ));
        }

        let signature = transaction.signatures[0];
        self.record(ConnectionCall::SendTransaction(signature));
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(signature)
    }
}
