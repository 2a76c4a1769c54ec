use anchor_lang::prelude::*;

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

#[constant]
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

#[constant]
pub const VAULT_TOKEN_ACCOUNT_SEED: &[u8] = b"vault_token_account";

/// Token base units paid per lamport in `buy_sol`.
/// Placeholder until a price feed replaces it.
#[constant]
pub const FIXED_RATE: u64 = 100;
