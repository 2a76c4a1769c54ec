use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub token_vault: Option<Pubkey>,
    pub mint: Option<Pubkey>,
}

#[event]
pub struct SolDeposited {
    pub vault: Pubkey,
    pub signer: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct SolWithdrawn {
    pub vault: Pubkey,
    pub signer: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct SolBought {
    pub vault: Pubkey,
    pub token_vault: Pubkey,
    pub signer: Pubkey,
    pub buy_size: u64,
    pub sol_received: u64,
    pub new_balance: u64,
}

/// Emitted when the token-side authority turns SOL purchases on or off.
#[event]
pub struct SwapToggled {
    pub token_vault: Pubkey,
    pub authority: Pubkey,
    pub enabled: bool,
}
