use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::state::{TokenVault, Vault};

/// Numeric code carried by an Anchor error, e.g. 6000 for `Unauthorized`.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {:?}", e),
    }
}

pub fn sample_vault(authority: Pubkey, balance: u64) -> Vault {
    Vault {
        authority,
        balance,
        bump: 255,
        is_initialized: true,
    }
}

/// An initialized token vault paired with `vault`, swaps still disabled.
pub fn sample_token_vault(vault: Pubkey, authority: Pubkey) -> TokenVault {
    TokenVault {
        authority,
        mint: Pubkey::new_unique(),
        token_account: Pubkey::new_unique(),
        vault,
        bump: 254,
        swap_enabled: false,
        is_initialized: true,
    }
}
