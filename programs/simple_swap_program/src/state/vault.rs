use anchor_lang::prelude::*;

use crate::math::SafeMath;

/// Native-asset ledger for a single authority.
///
/// `balance` counts deposited lamports only. The rent-exempt reserve the
/// account was created with is never part of it, so withdrawing the full
/// balance leaves the account alive.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Vault {
    pub authority: Pubkey,
    pub balance: u64,
    pub bump: u8,
    pub is_initialized: bool,
}

impl Vault {
    // 8 discriminator + 32 authority + 8 balance + 1 bump + 1 is_initialized
    pub const SPACE: usize = 8 + 32 + 8 + 1 + 1;

    pub fn initialize(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.balance = 0;
        self.bump = bump;
        self.is_initialized = true;
    }

    /// Adds `amount` and returns the new balance. Callers validate the amount
    /// first; an overflow here means a missed check, not bad user input.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self.balance.safe_add(amount)?;
        Ok(self.balance)
    }

    /// Subtracts `amount` and returns the new balance.
    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self.balance.safe_sub(amount)?;
        Ok(self.balance)
    }
}
