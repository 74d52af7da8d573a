//! End-to-end launch flow against the recording connection

use launchpad_sdk::{
    instructions::associated_token_address,
    testing::{ConnectionCall, MockConnection},
    DisconnectedWallet, KeypairWallet, LaunchError, LaunchOptions, LaunchStep, MintKeyStore,
    TokenForm, TokenLauncher, DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_token_2022::instruction::TokenInstruction;

fn test_form() -> TokenForm {
    TokenForm::new("Test", "TST", "https://x/y.png")
}

fn instruction_accounts(tx: &Transaction, index: usize) -> Vec<Pubkey> {
    tx.message.instructions[index]
        .accounts
        .iter()
        .map(|&i| tx.message.account_keys[i as usize])
        .collect()
}

fn minted_amount(tx: &Transaction) -> u64 {
    match TokenInstruction::unpack(&tx.message.instructions[0].data).unwrap() {
        TokenInstruction::MintTo { amount } => amount,
        other => panic!("expected MintTo, got {other:?}"),
    }
}

#[tokio::test]
async fn test_disconnected_wallet_shows_notice_without_network() {
    let wallet = DisconnectedWallet;
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let result = TokenLauncher::new(&wallet, &connection).launch(&params).await;

    assert!(matches!(result, Err(LaunchError::WalletNotConnected)));
    assert!(connection.calls().is_empty());
    assert!(connection.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_three_submissions_in_order() {
    let owner = Keypair::new();
    let owner_key = owner.pubkey();
    let wallet = KeypairWallet::new(owner);
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap();

    let [sig_1, sig_2, sig_3] = receipt.signatures();
    assert_eq!(
        connection.calls(),
        vec![
            ConnectionCall::RentExemption(340),
            ConnectionCall::LatestBlockhash,
            ConnectionCall::SendTransaction(sig_1),
            ConnectionCall::LatestBlockhash,
            ConnectionCall::SendTransaction(sig_2),
            ConnectionCall::LatestBlockhash,
            ConnectionCall::SendTransaction(sig_3),
        ]
    );

    let sent = connection.sent_transactions();
    assert_eq!(sent.len(), 3);
    for tx in &sent {
        assert_eq!(tx.message.account_keys[0], owner_key, "wallet pays fees");
        assert!(tx.verify().is_ok());
    }
}

#[tokio::test]
async fn test_same_mint_across_all_transactions() {
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap();
    let mint = receipt.mint_address();
    let sent = connection.sent_transactions();

    // Transaction 1: create account, metadata pointer, mint, metadata
    assert_eq!(sent[0].message.instructions.len(), 4);
    for index in 0..4 {
        assert!(instruction_accounts(&sent[0], index).contains(&mint));
    }
    // The mint keypair co-signed account creation
    assert!(sent[0].message.signer_keys().contains(&&mint));

    assert!(instruction_accounts(&sent[1], 0).contains(&mint));
    assert_eq!(instruction_accounts(&sent[2], 0)[0], mint);
}

#[tokio::test]
async fn test_associated_account_matches_independent_derivation() {
    let owner = Keypair::new();
    let owner_key = owner.pubkey();
    let wallet = KeypairWallet::new(owner);
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap();

    let expected = get_associated_token_address_with_program_id(
        &owner_key,
        &receipt.mint_address(),
        &spl_token_2022::id(),
    );
    assert_eq!(receipt.account.associated_account, expected);
    assert_eq!(
        associated_token_address(&owner_key, &receipt.mint_address()),
        expected
    );

    let sent = connection.sent_transactions();
    assert_eq!(instruction_accounts(&sent[1], 0)[1], expected);
    assert_eq!(instruction_accounts(&sent[2], 0)[1], expected);
}

#[tokio::test]
async fn test_default_supply_mints_fixed_amount() {
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap();

    assert_eq!(receipt.supply.amount, 1_000_000_000);
    assert_eq!(minted_amount(&connection.sent_transactions()[2]), 1_000_000_000);
}

#[tokio::test]
async fn test_entered_supply_is_scaled_by_decimals() {
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new();
    let params = test_form()
        .with_supply("100")
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap();

    assert_eq!(receipt.supply.amount, 100_000_000_000);
    assert_eq!(
        minted_amount(&connection.sent_transactions()[2]),
        100_000_000_000
    );
}

#[tokio::test]
async fn test_failure_in_step_two_is_distinguishable() {
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new().rejecting_submission(1);
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let err = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap_err();

    assert_eq!(err.failed_step(), Some(LaunchStep::CreateAssociatedAccount));
    assert!(matches!(err.root_cause(), LaunchError::Rpc(_)));
    // Step 1 landed, step 3 never started
    assert_eq!(connection.sent_transactions().len(), 1);
    assert_eq!(
        connection.calls().last(),
        Some(&ConnectionCall::RejectedTransaction)
    );
}

#[tokio::test]
async fn test_failure_in_step_one() {
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new().rejecting_submission(0);
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let err = TokenLauncher::new(&wallet, &connection)
        .launch(&params)
        .await
        .unwrap_err();

    assert_eq!(err.failed_step(), Some(LaunchStep::CreateMint));
    assert!(connection.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_mint_key_persisted_before_submission() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = KeypairWallet::new(Keypair::new());
    // Reject the very first submission: the key must already be on disk
    let connection = MockConnection::new().rejecting_submission(0);
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();
    let mint_keypair = Keypair::new();
    let mint = mint_keypair.pubkey();

    let launcher = TokenLauncher::new(&wallet, &connection).with_options(LaunchOptions {
        mint_key_store: MintKeyStore::Directory(dir.path().to_path_buf()),
        ..LaunchOptions::default()
    });
    let err = launcher
        .launch_with_mint(&params, mint_keypair)
        .await
        .unwrap_err();
    assert_eq!(err.failed_step(), Some(LaunchStep::CreateMint));

    let saved = read_keypair_file(dir.path().join(format!("{mint}.json"))).unwrap();
    assert_eq!(saved.pubkey(), mint);
}

#[tokio::test]
async fn test_receipt_reports_key_path() {
    let dir = tempfile::tempdir().unwrap();
    let key_file = dir.path().join("mint.json");
    let wallet = KeypairWallet::new(Keypair::new());
    let connection = MockConnection::new();
    let params = test_form()
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)
        .unwrap();

    let receipt = TokenLauncher::new(&wallet, &connection)
        .with_options(LaunchOptions {
            mint_key_store: MintKeyStore::File(key_file.clone()),
            ..LaunchOptions::default()
        })
        .launch(&params)
        .await
        .unwrap();

    assert_eq!(receipt.mint_key_path(), Some(key_file.as_path()));
    let saved = read_keypair_file(&key_file).unwrap();
    assert_eq!(saved.pubkey(), receipt.mint_address());
}
