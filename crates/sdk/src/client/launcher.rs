//! Token launch pipeline
//!
//! Three dependent transactions, each submitted only after the previous one
//! returned:
//! 1. create the mint account, metadata pointer, mint and metadata
//! 2. create the wallet's associated token account
//! 3. mint the initial supply into it
//!
//! There is no retry or rollback. A failure is tagged with the step it
//! happened in and the mint address, so a half-finished launch can be
//! picked up by hand.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::{
    client::{connection::Connection, wallet::Wallet},
    errors::{LaunchError, LaunchResult},
    instructions::{
        associated_token_address, create_associated_account_instruction,
        create_mint_instructions, mint_to_instruction, token_metadata, MintLayout,
    },
    types::{
        AccountCreated, LaunchOptions, LaunchReceipt, LaunchStep, MintCreated, SupplyMinted,
        TokenParams,
    },
    utils::persist_keypair,
};

/// Runs a launch against an explicitly passed wallet and connection
pub struct TokenLauncher<'a> {
    wallet: &'a dyn Wallet,
    connection: &'a dyn Connection,
    options: LaunchOptions,
}

impl<'a> TokenLauncher<'a> {
    pub fn new(wallet: &'a dyn Wallet, connection: &'a dyn Connection) -> Self {
        Self {
            wallet,
            connection,
            options: LaunchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LaunchOptions) -> Self {
        self.options = options;
        self
    }

    /// Public key of the connected wallet, or `WalletNotConnected`
    pub fn connected_owner(&self) -> LaunchResult<Pubkey> {
        match self.wallet.public_key() {
            Some(owner) if self.wallet.connected() => Ok(owner),
            _ => Err(LaunchError::WalletNotConnected),
        }
    }

    /// Run all three steps with a freshly generated mint keypair
    pub async fn launch(&self, params: &TokenParams) -> LaunchResult<LaunchReceipt> {
        self.launch_with_mint(params, Keypair::new()).await
    }

    /// Run all three steps with the given mint keypair
    pub async fn launch_with_mint(
        &self,
        params: &TokenParams,
        mint_keypair: Keypair,
    ) -> LaunchResult<LaunchReceipt> {
        // Nothing touches the network without a wallet
        let owner = self.connected_owner()?;
        let mint = mint_keypair.pubkey();

        let mint_key_path = self.options.mint_key_store.path_for(&mint);
        if let Some(path) = &mint_key_path {
            persist_keypair(&mint_keypair, path)
                .map_err(|e| e.at_step(LaunchStep::CreateMint, mint))?;
            log::info!("Mint keypair saved to {}", path.display());
        }

        let minted = self
            .create_mint(owner, &mint_keypair, params)
            .await
            .map_err(|e| e.at_step(LaunchStep::CreateMint, mint))?;
        log::info!("Token mint created at {}", minted.mint);

        let account = self
            .create_associated_account(owner, &minted)
            .await
            .map_err(|e| e.at_step(LaunchStep::CreateAssociatedAccount, mint))?;
        log::info!("Associated token account: {}", account.associated_account);

        let amount = params
            .supply_base_units()
            .map_err(|e| e.at_step(LaunchStep::MintSupply, mint))?;
        let supply = self
            .mint_supply(owner, &minted, &account, amount)
            .await
            .map_err(|e| e.at_step(LaunchStep::MintSupply, mint))?;
        log::info!("Minted! {} base units to {}", supply.amount, account.associated_account);

        Ok(LaunchReceipt {
            mint: minted,
            account,
            supply,
            mint_key_path,
        })
    }

    /// Step 1: create and initialize the mint with its metadata
    pub async fn create_mint(
        &self,
        owner: Pubkey,
        mint_keypair: &Keypair,
        params: &TokenParams,
    ) -> LaunchResult<MintCreated> {
        let mint = mint_keypair.pubkey();
        let metadata = token_metadata(&mint, params);
        let layout = MintLayout::for_metadata(&metadata)?;

        let rent_lamports = self
            .connection
            .get_minimum_balance_for_rent_exemption(layout.rent_exempt_space())
            .await?;
        log::debug!(
            "Mint {} needs {} bytes ({} mint + {} metadata), rent {} lamports",
            mint,
            layout.rent_exempt_space(),
            layout.mint_space,
            layout.metadata_space,
            rent_lamports
        );

        let instructions = create_mint_instructions(
            &owner,
            &mint,
            params,
            &layout,
            rent_lamports,
            self.options.freeze_authority,
        )?;

        let mut transaction = Transaction::new_with_payer(&instructions, Some(&owner));
        let blockhash = self.connection.get_latest_blockhash().await?;
        transaction.try_partial_sign(&[mint_keypair], blockhash)?;

        let signature = self
            .wallet
            .send_transaction(transaction, self.connection)
            .await?;

        Ok(MintCreated {
            mint,
            signature,
            mint_space: layout.mint_space,
            metadata_space: layout.metadata_space,
            rent_lamports,
            decimals: params.decimals,
        })
    }

    /// Step 2: create the owner's associated token account
    pub async fn create_associated_account(
        &self,
        owner: Pubkey,
        minted: &MintCreated,
    ) -> LaunchResult<AccountCreated> {
        let associated_account = associated_token_address(&owner, &minted.mint);
        let instruction = create_associated_account_instruction(&owner, &owner, &minted.mint);
        let transaction = Transaction::new_with_payer(&[instruction], Some(&owner));

        let signature = self
            .wallet
            .send_transaction(transaction, self.connection)
            .await?;

        Ok(AccountCreated {
            associated_account,
            signature,
        })
    }

    /// Step 3: mint `amount` base units into the associated account
    pub async fn mint_supply(
        &self,
        owner: Pubkey,
        minted: &MintCreated,
        account: &AccountCreated,
        amount: u64,
    ) -> LaunchResult<SupplyMinted> {
        let instruction =
            mint_to_instruction(&minted.mint, &account.associated_account, &owner, amount)?;
        let transaction = Transaction::new_with_payer(&[instruction], Some(&owner));

        let signature = self
            .wallet
            .send_transaction(transaction, self.connection)
            .await?;

        Ok(SupplyMinted { amount, signature })
    }
}
