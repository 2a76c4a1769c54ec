//! Program tests on LiteSVM.
//!
//! These load `target/deploy/simple_swap_program.so`, so build the program
//! (`anchor build` or `cargo build-sbf`) before `cargo test`. When the
//! artifact is missing the tests return early instead of failing.


use std::path::PathBuf;

use anchor_lang::prelude::{msg, Pubkey};
use anchor_lang::solana_program::instruction::Instruction as SdkInstruction;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::spl_token;
use litesvm::LiteSVM;
use solana_account::Account as LiteAccount;
use solana_instruction::{AccountMeta as LiteAccountMeta, Instruction as LiteInstruction};
use solana_keypair::Keypair;
use solana_message::Message;
use solana_pubkey::Pubkey as LitePubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED, VAULT_TOKEN_ACCOUNT_SEED};
use crate::state::{TokenVault, Vault};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub fn to_lite_pubkey(pubkey: &Pubkey) -> LitePubkey {
    LitePubkey::from(pubkey.to_bytes())
}

pub fn from_lite_pubkey(pubkey: &LitePubkey) -> Pubkey {
    Pubkey::from(pubkey.to_bytes())
}

pub fn to_lite_instruction(ix: SdkInstruction) -> LiteInstruction {
    LiteInstruction {
        program_id: to_lite_pubkey(&ix.program_id),
        accounts: ix
            .accounts
            .into_iter()
            .map(|acc| LiteAccountMeta {
                pubkey: to_lite_pubkey(&acc.pubkey),
                is_signer: acc.is_signer,
                is_writable: acc.is_writable,
            })
            .collect(),
        data: ix.data,
    }
}

/// A failed transaction, kept as text so checks can look for `Custom(<code>)`.
#[derive(Debug)]
pub struct Revert {
    pub error: String,
    pub logs: Vec<String>,
}

impl Revert {
    pub fn has_error_code(&self, code: u32) -> bool {
        self.error.contains(&format!("Custom({})", code))
            || self.logs.iter().any(|log| log.contains(&format!("Error Number: {}", code)))
    }
}

pub struct Harness {
    pub svm: LiteSVM,
    /// Pays transaction fees only, so signer lamport deltas stay exact.
    pub fee_payer: Keypair,
}

impl Harness {
    pub fn new() -> Option<Self> {
        let so_path =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy/simple_swap_program.so");
        let program_data = match std::fs::read(&so_path) {
            Ok(data) => data,
            Err(_) => {
                msg!("Skipping program test, {} not built", so_path.display());
                return None;
            }
        };

        let mut svm = LiteSVM::new();
        svm.add_program(to_lite_pubkey(&crate::ID), &program_data);

        let fee_payer = Keypair::new();
        svm.airdrop(&fee_payer.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to airdrop SOL to fee payer");

        Some(Self { svm, fee_payer })
    }

    pub fn funded_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), lamports)
            .expect("Failed to airdrop SOL");
        keypair
    }

    pub fn send(&mut self, ix: SdkInstruction, signers: &[&Keypair]) -> Result<(), Revert> {
        // Identical retries would otherwise be rejected as already processed.
        self.svm.expire_blockhash();

        let message = Message::new(&[to_lite_instruction(ix)], Some(&self.fee_payer.pubkey()));
        let mut all_signers: Vec<&Keypair> = vec![&self.fee_payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new(&all_signers[..], message, self.svm.latest_blockhash());

        match self.svm.send_transaction(tx) {
            Ok(_) => Ok(()),
            Err(failed) => Err(Revert {
                error: format!("{:?}", failed.err),
                logs: failed.meta.logs,
            }),
        }
    }

    pub fn lamports(&self, pubkey: &Pubkey) -> u64 {
        self.svm
            .get_account(&to_lite_pubkey(pubkey))
            .map(|account| account.lamports)
            .unwrap_or(0)
    }

    pub fn rent_exempt(&self, space: usize) -> u64 {
        self.svm.minimum_balance_for_rent_exemption(space)
    }

    pub fn vault(&self, pubkey: &Pubkey) -> Vault {
        let account = self.svm.get_account(&to_lite_pubkey(pubkey)).expect("vault account missing");
        Vault::try_deserialize(&mut account.data.as_slice()).expect("vault data")
    }

    pub fn token_vault(&self, pubkey: &Pubkey) -> TokenVault {
        let account = self
            .svm
            .get_account(&to_lite_pubkey(pubkey))
            .expect("token vault account missing");
        TokenVault::try_deserialize(&mut account.data.as_slice()).expect("token vault data")
    }

    pub fn token_amount(&self, pubkey: &Pubkey) -> u64 {
        let account = self
            .svm
            .get_account(&to_lite_pubkey(pubkey))
            .expect("token account missing");
        spl_token::state::Account::unpack(&account.data)
            .expect("token account data")
            .amount
    }

    fn set_token_program_account(&mut self, pubkey: Pubkey, data: Vec<u8>) {
        let lamports = self.rent_exempt(data.len());
        self.svm
            .set_account(
                to_lite_pubkey(&pubkey),
                LiteAccount {
                    lamports,
                    data,
                    owner: to_lite_pubkey(&spl_token::ID),
                    executable: false,
                    rent_epoch: 0,
                },
            )
            .expect("Failed to set token program account");
    }

    /// Writes an initialized mint straight into the SVM.
    pub fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Pubkey {
        let mint = Pubkey::new_unique();
        let state = spl_token::state::Mint {
            mint_authority: COption::Some(*authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(state, &mut data).expect("pack mint");
        self.set_token_program_account(mint, data);
        mint
    }

    /// Writes a token account holding `amount` of `mint` for `owner`.
    pub fn create_token_account(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Pubkey {
        let address = Pubkey::new_unique();
        let state = spl_token::state::Account {
            mint: *mint,
            owner: *owner,
            amount,
            delegate: COption::None,
            state: spl_token::state::AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(state, &mut data).expect("pack token account");
        self.set_token_program_account(address, data);
        address
    }
}

pub fn vault_address(authority: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_SEED, authority.as_ref()], &crate::ID).0
}

pub fn token_vault_address(vault: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[TOKEN_VAULT_SEED, vault.as_ref()], &crate::ID).0
}

pub fn vault_token_account_address(token_vault: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_TOKEN_ACCOUNT_SEED, token_vault.as_ref()], &crate::ID).0
}

pub fn authority_pubkey(keypair: &Keypair) -> Pubkey {
    from_lite_pubkey(&keypair.pubkey())
}
