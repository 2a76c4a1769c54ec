//! State transitions over a vault and its token side.
//!
//! Each function runs its guard checks to completion before touching any
//! field, so an `Err` always leaves the accounts exactly as they were.
//! Asset movement (system and token transfers) is left to the instruction
//! handlers; the runtime rolls those back together with the account data.

use anchor_lang::prelude::*;

use crate::constants::FIXED_RATE;
use crate::errors::VaultError;
use crate::guard::{self, VerifiedSigner};
use crate::math::quote_sol_out;
use crate::state::{TokenVault, TokenVaultParams, Vault};

/// Binds a fresh vault to `authority`, and the token side when one is given.
pub fn initialize(
    vault: &mut Vault,
    authority: &VerifiedSigner,
    bump: u8,
    token_side: Option<(&mut TokenVault, TokenVaultParams)>,
) -> Result<()> {
    guard::check_not_initialized(vault.is_initialized)?;
    if let Some((token_vault, _)) = &token_side {
        guard::check_not_initialized(token_vault.is_initialized)?;
    }

    vault.initialize(authority.key(), bump);
    if let Some((token_vault, params)) = token_side {
        token_vault.initialize(params);
    }
    Ok(())
}

pub fn deposit_sol(vault: &mut Vault, signer: &VerifiedSigner, amount: u64) -> Result<u64> {
    guard::check_authority(&vault.authority, signer)?;
    guard::check_positive_amount(amount)?;

    vault.credit(amount)
}

pub fn withdraw_sol(vault: &mut Vault, signer: &VerifiedSigner, amount: u64) -> Result<u64> {
    guard::check_authority(&vault.authority, signer)?;
    guard::check_positive_amount(amount)?;
    guard::check_sufficient_balance(vault, amount)?;

    vault.debit(amount)
}

/// Outcome of a SOL purchase, in lamports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuySolOutcome {
    pub sol_received: u64,
    pub new_balance: u64,
}

/// Token accounts a purchase moves funds between.
#[derive(Clone, Copy, Debug)]
pub struct TokenLegs {
    pub from_mint: Pubkey,
    pub to_account: Pubkey,
    pub to_mint: Pubkey,
}

/// Sells `floor(buy_size / FIXED_RATE)` lamports from the vault to the
/// token-side authority. The caller moves `buy_size` tokens into the vault's
/// token account once this succeeds.
pub fn buy_sol(
    vault: &mut Vault,
    vault_key: &Pubkey,
    token_vault: &TokenVault,
    signer: &VerifiedSigner,
    legs: &TokenLegs,
    buy_size: u64,
) -> Result<BuySolOutcome> {
    guard::check_paired(token_vault, vault_key)?;
    guard::check_authority(&token_vault.authority, signer)?;
    guard::check_positive_amount(buy_size)?;
    guard::check_swap_enabled(token_vault)?;
    guard::check_token_account(token_vault, &legs.to_account, &legs.to_mint)?;
    require_keys_eq!(legs.from_mint, token_vault.mint, VaultError::MintMismatch);

    let sol_received = quote_sol_out(buy_size, FIXED_RATE)?;
    guard::check_sufficient_balance(vault, sol_received)?;

    let new_balance = vault.debit(sol_received)?;
    Ok(BuySolOutcome { sol_received, new_balance })
}

pub fn set_swap_enabled(
    token_vault: &mut TokenVault,
    vault_key: &Pubkey,
    signer: &VerifiedSigner,
    enabled: bool,
) -> Result<()> {
    guard::check_paired(token_vault, vault_key)?;
    guard::check_authority(&token_vault.authority, signer)?;

    token_vault.swap_enabled = enabled;
    Ok(())
}
