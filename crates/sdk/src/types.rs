//! Launch inputs and per-step results

use std::{
    fmt,
    path::{Path, PathBuf},
};

use solana_sdk::{pubkey::Pubkey, signature::Signature};

use crate::{
    constants::{
        DEFAULT_DECIMALS, DEFAULT_SUPPLY_BASE_UNITS, MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN,
    },
    errors::{LaunchError, LaunchResult},
};

/// Raw token creation form, as entered by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    /// Decimal token amount; empty means the default supply
    pub supply: Option<String>,
}

impl TokenForm {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            image_url: image_url.into(),
            supply: None,
        }
    }

    pub fn with_supply(mut self, supply: impl Into<String>) -> Self {
        self.supply = Some(supply.into());
        self
    }

    /// Validate the form into launch parameters
    pub fn validate(&self, decimals: u8, default_supply: u64) -> LaunchResult<TokenParams> {
        let name = required_field("name", &self.name, MAX_NAME_LEN)?;
        let symbol = required_field("symbol", &self.symbol, MAX_SYMBOL_LEN)?;
        let uri = required_field("image URL", &self.image_url, MAX_URI_LEN)?;

        url::Url::parse(&uri)
            .map_err(|e| LaunchError::InvalidInput(format!("image URL {uri:?}: {e}")))?;

        let supply = match self.supply.as_deref().map(str::trim) {
            None | Some("") => SupplyAmount::Fixed(default_supply),
            Some(amount) => SupplyAmount::Tokens(amount.to_string()),
        };
        // Reject bad amounts now rather than after the mint exists
        supply.to_base_units(decimals)?;

        Ok(TokenParams {
            name,
            symbol,
            uri,
            decimals,
            supply,
        })
    }
}

fn required_field(field: &str, value: &str, max_len: usize) -> LaunchResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LaunchError::InvalidInput(format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(LaunchError::InvalidInput(format!(
            "{field} is {} bytes, at most {max_len} allowed",
            value.len()
        )));
    }
    Ok(value.to_string())
}

/// Validated launch parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub supply: SupplyAmount,
}

impl TokenParams {
    /// Amount minted in step 3, in base units
    pub fn supply_base_units(&self) -> LaunchResult<u64> {
        self.supply.to_base_units(self.decimals)
    }
}

/// Initial supply to mint
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupplyAmount {
    /// Literal amount in base units
    Fixed(u64),
    /// Decimal token amount, scaled by the mint's decimals
    Tokens(String),
}

impl Default for SupplyAmount {
    fn default() -> Self {
        SupplyAmount::Fixed(DEFAULT_SUPPLY_BASE_UNITS)
    }
}

impl SupplyAmount {
    pub fn to_base_units(&self, decimals: u8) -> LaunchResult<u64> {
        let amount = match self {
            SupplyAmount::Fixed(amount) => *amount,
            SupplyAmount::Tokens(input) => parse_token_amount(input, decimals)?,
        };
        if amount == 0 {
            return Err(LaunchError::InvalidSupply(
                "supply must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }
}

/// Parse a decimal token amount such as `100` or `12.5` into base units
pub fn parse_token_amount(input: &str, decimals: u8) -> LaunchResult<u64> {
    let invalid = |reason: &str| LaunchError::InvalidSupply(format!("{input:?}: {reason}"));

    let input_trimmed = input.trim();
    let (whole, fraction) = input_trimmed
        .split_once('.')
        .unwrap_or((input_trimmed, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("not a number"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("not a non-negative decimal number"));
    }
    if fraction.len() > decimals as usize {
        return Err(invalid(&format!("more than {decimals} decimal places")));
    }

    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or_else(|| invalid("decimals too large"))?;
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_err(|_| invalid("amount too large"))?
    };
    let fraction_units = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = decimals as usize)
            .parse::<u64>()
            .map_err(|_| invalid("amount too large"))?
    };

    whole_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(|| invalid("amount too large"))
}

/// Where the generated mint keypair is written before anything is submitted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MintKeyStore {
    /// Key is dropped after signing
    #[default]
    Discard,
    /// `<dir>/<mint>.json`
    Directory(PathBuf),
    /// Exact file path
    File(PathBuf),
}

impl MintKeyStore {
    pub fn path_for(&self, mint: &Pubkey) -> Option<PathBuf> {
        match self {
            MintKeyStore::Discard => None,
            MintKeyStore::Directory(dir) => Some(dir.join(format!("{mint}.json"))),
            MintKeyStore::File(path) => Some(path.clone()),
        }
    }
}

/// Launch options that do not come from the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Set the wallet as freeze authority
    pub freeze_authority: bool,
    pub mint_key_store: MintKeyStore,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            freeze_authority: true,
            mint_key_store: MintKeyStore::Discard,
        }
    }
}

/// The three launch steps, in submission order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaunchStep {
    CreateMint,
    CreateAssociatedAccount,
    MintSupply,
}

impl LaunchStep {
    pub const ALL: [LaunchStep; 3] = [
        LaunchStep::CreateMint,
        LaunchStep::CreateAssociatedAccount,
        LaunchStep::MintSupply,
    ];

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            LaunchStep::CreateMint => 1,
            LaunchStep::CreateAssociatedAccount => 2,
            LaunchStep::MintSupply => 3,
        }
    }
}

impl fmt::Display for LaunchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LaunchStep::CreateMint => "create mint",
            LaunchStep::CreateAssociatedAccount => "create associated token account",
            LaunchStep::MintSupply => "mint supply",
        };
        write!(f, "{}/{} ({})", self.number(), LaunchStep::ALL.len(), label)
    }
}

/// Step 1 result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintCreated {
    pub mint: Pubkey,
    pub signature: Signature,
    /// Account size at creation (mint + metadata pointer)
    pub mint_space: usize,
    /// Bytes the metadata entry adds once initialized
    pub metadata_space: usize,
    pub rent_lamports: u64,
    pub decimals: u8,
}

/// Step 2 result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountCreated {
    pub associated_account: Pubkey,
    pub signature: Signature,
}

/// Step 3 result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyMinted {
    pub amount: u64,
    pub signature: Signature,
}

/// Outcome of a complete launch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub mint: MintCreated,
    pub account: AccountCreated,
    pub supply: SupplyMinted,
    pub mint_key_path: Option<PathBuf>,
}

impl LaunchReceipt {
    pub fn mint_address(&self) -> Pubkey {
        self.mint.mint
    }

    pub fn signatures(&self) -> [Signature; 3] {
        [
            self.mint.signature,
            self.account.signature,
            self.supply.signature,
        ]
    }

    pub fn mint_key_path(&self) -> Option<&Path> {
        self.mint_key_path.as_deref()
    }
}
