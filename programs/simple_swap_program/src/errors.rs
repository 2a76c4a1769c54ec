use anchor_lang::prelude::*;

// Codes are offset by 6000. Discriminants are part of the client contract:
// append new variants with a fresh number, never renumber.
#[error_code]
pub enum VaultError {
    #[msg("Signer is not the authority of this vault.")]
    Unauthorized = 0,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount = 1,
    #[msg("Vault balance is lower than the requested amount.")]
    InsufficientFunds = 2,
    #[msg("Vault account is already initialized.")]
    AlreadyInitialized = 3,
    #[msg("Math overflow in balance arithmetic.")]
    MathOverflow = 4,
    #[msg("SOL purchase is not enabled for this token vault.")]
    SwapDisabled = 5,
    #[msg("Token vault is not paired with this vault.")]
    VaultMismatch = 6,
    #[msg("Token account mint does not match the token vault mint.")]
    MintMismatch = 7,
    #[msg("Token account is not the one held by this token vault.")]
    TokenAccountMismatch = 8,
}
