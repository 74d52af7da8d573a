use launchpad_sdk::{
    KeypairWallet, LaunchOptions, MintKeyStore, RpcConnection, TokenForm, TokenLauncher,
    DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Token Launchpad SDK Example");
    println!("===========================\n");

    // Wallet from the default Solana CLI keypair
    let wallet = KeypairWallet::from_file("~/.config/solana/id.json")?;
    println!("Wallet: {}", wallet.pubkey());

    let connection = RpcConnection::devnet();
    println!("RPC URL: {}", connection.rpc_url());

    let params = TokenForm::new("Example Token", "EXMPL", "https://example.com/token.png")
        .with_supply("1000")
        .validate(DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS)?;

    let launcher = TokenLauncher::new(&wallet, &connection).with_options(LaunchOptions {
        mint_key_store: MintKeyStore::Directory("mint-keys".into()),
        ..LaunchOptions::default()
    });

    let receipt = launcher.launch(&params).await?;

    println!("\nMint: {}", receipt.mint_address());
    println!("Associated account: {}", receipt.account.associated_account);
    println!("Minted: {} base units", receipt.supply.amount);
    for (step, signature) in receipt.signatures().iter().enumerate() {
        println!("  [{}/3] {}", step + 1, signature);
    }

    Ok(())
}
