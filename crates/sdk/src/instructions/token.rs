//! Token-2022 instruction builders for the three launch transactions
//!
//! Every instruction comes from the program libraries; this module only
//! supplies arguments and sizes.

use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account,
};
use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    instruction as token_instruction,
    state::Mint,
};
use spl_token_metadata_interface::state::TokenMetadata;
use spl_type_length_value::variable_len_pack::VariableLenPack;

use crate::{
    constants::TLV_HEADER_LEN,
    errors::{LaunchError, LaunchResult},
    types::TokenParams,
};

/// Account sizes for a metadata-carrying mint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintLayout {
    /// Base mint plus the metadata pointer extension; the account is created with this size
    pub mint_space: usize,
    /// TLV header plus packed metadata; added by realloc during metadata initialization
    pub metadata_space: usize,
}

impl MintLayout {
    pub fn for_metadata(metadata: &TokenMetadata) -> LaunchResult<Self> {
        Ok(Self {
            mint_space: mint_account_space()?,
            metadata_space: metadata_space(metadata)?,
        })
    }

    /// Size the rent-exempt balance must cover
    pub fn rent_exempt_space(&self) -> usize {
        self.mint_space + self.metadata_space
    }
}

/// Size of a Token-2022 mint with the metadata pointer extension
pub fn mint_account_space() -> LaunchResult<usize> {
    Ok(ExtensionType::try_calculate_account_len::<Mint>(&[
        ExtensionType::MetadataPointer,
    ])?)
}

/// Metadata record stored on the mint itself
pub fn token_metadata(mint: &Pubkey, params: &TokenParams) -> TokenMetadata {
    TokenMetadata {
        mint: *mint,
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        uri: params.uri.clone(),
        additional_metadata: vec![],
        ..Default::default()
    }
}

/// Extension header plus packed metadata length, as appended to the mint account
pub fn metadata_space(metadata: &TokenMetadata) -> LaunchResult<usize> {
    packed_metadata_len(metadata)?
        .checked_add(TLV_HEADER_LEN)
        .ok_or_else(|| LaunchError::Instruction("metadata length overflow".to_string()))
}

/// Packed (borsh) length of the metadata record, without the extension header
pub fn packed_metadata_len(metadata: &TokenMetadata) -> LaunchResult<usize> {
    Ok(metadata.get_packed_len()?)
}

/// Instructions of the mint creation transaction, in order:
/// create account, metadata pointer, mint, metadata
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    params: &TokenParams,
    layout: &MintLayout,
    rent_lamports: u64,
    freeze_authority: bool,
) -> LaunchResult<Vec<Instruction>> {
    let token_program = spl_token_2022::id();

    let create_account_ix = system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        layout.mint_space as u64,
        &token_program,
    );

    let metadata_pointer_ix = metadata_pointer::instruction::initialize(
        &token_program,
        mint,
        Some(*payer),
        Some(*mint),
    )?;

    let freeze = freeze_authority.then_some(payer);
    let init_mint_ix =
        token_instruction::initialize_mint(&token_program, mint, payer, freeze, params.decimals)?;

    let init_metadata_ix = spl_token_metadata_interface::instruction::initialize(
        &token_program,
        mint,
        payer,
        mint,
        payer,
        params.name.clone(),
        params.symbol.clone(),
        params.uri.clone(),
    );

    Ok(vec![
        create_account_ix,
        metadata_pointer_ix,
        init_mint_ix,
        init_metadata_ix,
    ])
}

/// Associated Token-2022 account of `owner` for `mint`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &spl_token_2022::id())
}

/// Create the owner's associated account, funded by `payer`
pub fn create_associated_account_instruction(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    create_associated_token_account(payer, owner, mint, &spl_token_2022::id())
}

/// Mint `amount` base units to `destination`, signed by the mint authority
pub fn mint_to_instruction(
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> LaunchResult<Instruction> {
    Ok(token_instruction::mint_to(
        &spl_token_2022::id(),
        mint,
        destination,
        mint_authority,
        &[],
        amount,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SupplyAmount;
    use solana_sdk::system_program;
    use spl_token_2022::instruction::TokenInstruction;

    fn params() -> TokenParams {
        TokenParams {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            uri: "https://x/y.png".to_string(),
            decimals: 9,
            supply: SupplyAmount::default(),
        }
    }

    #[test]
    fn test_mint_account_space() {
        // 165 base account + 1 account type + 4 TLV header + 64 pointer
        assert_eq!(mint_account_space().unwrap(), 234);
    }

    #[test]
    fn test_metadata_space_matches_borsh_layout() {
        let params = params();
        let metadata = token_metadata(&Pubkey::new_unique(), &params);

        // update authority + mint + three length-prefixed strings + empty vec
        let expected_packed = 32
            + 32
            + (4 + params.name.len())
            + (4 + params.symbol.len())
            + (4 + params.uri.len())
            + 4;
        assert_eq!(packed_metadata_len(&metadata).unwrap(), expected_packed);
        assert_eq!(
            metadata_space(&metadata).unwrap(),
            TLV_HEADER_LEN + expected_packed
        );
    }

    #[test]
    fn test_layout_rent_space() {
        let metadata = token_metadata(&Pubkey::new_unique(), &params());
        let layout = MintLayout::for_metadata(&metadata).unwrap();
        assert_eq!(layout.rent_exempt_space(), 234 + 106);
        assert_eq!(layout.rent_exempt_space(), 340);
    }

    #[test]
    fn test_metadata_space_grows_with_fields() {
        let short = token_metadata(&Pubkey::new_unique(), &params());
        let long = token_metadata(
            &Pubkey::new_unique(),
            &TokenParams {
                uri: "https://x/y.png?size=large".to_string(),
                ..params()
            },
        );

        assert_eq!(metadata_space(&short).unwrap(), 106);
        assert_eq!(
            metadata_space(&long).unwrap() - metadata_space(&short).unwrap(),
            "?size=large".len()
        );
    }

    #[test]
    fn test_create_mint_instructions_reference_mint() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let params = params();
        let layout = MintLayout::for_metadata(&token_metadata(&mint, &params)).unwrap();

        let ixs = create_mint_instructions(&payer, &mint, &params, &layout, 5_000_000, true)
            .unwrap();

        assert_eq!(ixs.len(), 4);
        assert_eq!(ixs[0].program_id, system_program::id());
        for ix in &ixs[1..] {
            assert_eq!(ix.program_id, spl_token_2022::id());
        }
        for ix in &ixs {
            assert!(ix.accounts.iter().any(|meta| meta.pubkey == mint));
        }
        // Mint keypair must co-sign the account creation
        assert!(ixs[0]
            .accounts
            .iter()
            .any(|meta| meta.pubkey == mint && meta.is_signer));
    }

    #[test]
    fn test_initialize_mint_authorities() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let params = params();
        let layout = MintLayout::for_metadata(&token_metadata(&mint, &params)).unwrap();

        let with_freeze =
            create_mint_instructions(&payer, &mint, &params, &layout, 1, true).unwrap();
        match TokenInstruction::unpack(&with_freeze[2].data).unwrap() {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                assert_eq!(decimals, 9);
                assert_eq!(mint_authority, payer);
                assert_eq!(Option::<Pubkey>::from(freeze_authority), Some(payer));
            }
            other => panic!("unexpected instruction {other:?}"),
        }

        let without_freeze =
            create_mint_instructions(&payer, &mint, &params, &layout, 1, false).unwrap();
        match TokenInstruction::unpack(&without_freeze[2].data).unwrap() {
            TokenInstruction::InitializeMint {
                freeze_authority, ..
            } => assert_eq!(Option::<Pubkey>::from(freeze_authority), None),
            other => panic!("unexpected instruction {other:?}"),
        }
    }

    #[test]
    fn test_associated_account_instruction() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ata = associated_token_address(&payer, &mint);

        assert_eq!(
            ata,
            get_associated_token_address_with_program_id(&payer, &mint, &spl_token_2022::id())
        );

        let ix = create_associated_account_instruction(&payer, &payer, &mint);
        assert_eq!(ix.program_id, spl_associated_token_account::id());
        assert_eq!(ix.accounts[1].pubkey, ata);
        assert_eq!(ix.accounts[3].pubkey, mint);
    }

    #[test]
    fn test_mint_to_instruction() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let ata = associated_token_address(&authority, &mint);

        let ix = mint_to_instruction(&mint, &ata, &authority, 1_000_000_000).unwrap();
        assert_eq!(ix.accounts[0].pubkey, mint);
        assert_eq!(ix.accounts[1].pubkey, ata);
        assert_eq!(ix.accounts[2].pubkey, authority);
        assert!(matches!(
            TokenInstruction::unpack(&ix.data).unwrap(),
            TokenInstruction::MintTo { amount: 1_000_000_000 }
        ));
    }
}
