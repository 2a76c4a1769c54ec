//! Side-effect free checks run before any account is mutated.
//!
//! Operations call these in a fixed order: authority, then amount, then
//! balance. A caller who fails the authority check learns nothing about the
//! vault's funds.

use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::state::{TokenVault, Vault};

/// An identity whose signature the runtime has already verified.
///
/// The only production constructor takes an Anchor [`Signer`], so the engine
/// cannot be handed a key that merely claims to have signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedSigner(Pubkey);

impl VerifiedSigner {
    pub fn from_signer(signer: &Signer<'_>) -> Self {
        Self(signer.key())
    }

    pub fn key(&self) -> Pubkey {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn assume_signed(key: Pubkey) -> Self {
        Self(key)
    }
}

pub fn check_authority(authority: &Pubkey, signer: &VerifiedSigner) -> Result<()> {
    require_keys_eq!(*authority, signer.key(), VaultError::Unauthorized);
    Ok(())
}

pub fn check_positive_amount(amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::InvalidAmount);
    Ok(())
}

pub fn check_sufficient_balance(vault: &Vault, amount: u64) -> Result<()> {
    require!(vault.balance >= amount, VaultError::InsufficientFunds);
    Ok(())
}

pub fn check_not_initialized(is_initialized: bool) -> Result<()> {
    require!(!is_initialized, VaultError::AlreadyInitialized);
    Ok(())
}

pub fn check_paired(token_vault: &TokenVault, vault: &Pubkey) -> Result<()> {
    require_keys_eq!(token_vault.vault, *vault, VaultError::VaultMismatch);
    Ok(())
}

/// `account` must be the token vault's own token account and hold its mint.
pub fn check_token_account(token_vault: &TokenVault, account: &Pubkey, mint: &Pubkey) -> Result<()> {
    require_keys_eq!(token_vault.token_account, *account, VaultError::TokenAccountMismatch);
    require_keys_eq!(token_vault.mint, *mint, VaultError::MintMismatch);
    Ok(())
}

pub fn check_swap_enabled(token_vault: &TokenVault) -> Result<()> {
    require!(token_vault.swap_enabled, VaultError::SwapDisabled);
    Ok(())
}
