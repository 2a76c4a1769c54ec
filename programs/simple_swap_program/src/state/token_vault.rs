use anchor_lang::prelude::*;

/// Token-side companion of a [`Vault`](super::Vault).
/// Created in the same instruction as its vault and never re-paired.
///
/// Custody is one-way for now: tokens paid in through `buy_sol` stay in
/// `token_account`. There is no token withdrawal or close instruction yet.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TokenVault {
    /// May differ from the vault authority when a token authority was designated.
    pub authority: Pubkey,
    pub mint: Pubkey,
    /// Program-held SPL token account, owned by this PDA.
    pub token_account: Pubkey,
    pub vault: Pubkey,
    pub bump: u8,
    /// SOL purchases stay off until the authority turns them on.
    pub swap_enabled: bool,
    pub is_initialized: bool,
}

impl TokenVault {
    // 8 discriminator
    // + 32 (authority) + 32 (mint) + 32 (token_account) + 32 (vault)
    // + 1 (bump) + 1 (swap_enabled) + 1 (is_initialized)
    pub const SPACE: usize = 8 + 32 + 32 + 32 + 32 + 1 + 1 + 1;

    pub fn initialize(&mut self, params: TokenVaultParams) {
        self.authority = params.authority;
        self.mint = params.mint;
        self.token_account = params.token_account;
        self.vault = params.vault;
        self.bump = params.bump;
        self.swap_enabled = false;
        self.is_initialized = true;
    }
}

/// Everything needed to create the token side during initialize.
#[derive(Clone, Copy, Debug)]
pub struct TokenVaultParams {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub bump: u8,
}
