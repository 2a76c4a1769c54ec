use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod math;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::VaultError;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("13avuvj2qnHq6CwsuYFR7jLrKbbzgGXxscfZCBQR7kJW");

#[program]
pub mod simple_swap_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn initialize_with_mint(ctx: Context<InitializeWithMint>, token_authority: Option<Pubkey>) -> Result<()> {
        instructions::initialize_with_mint(ctx, token_authority)
    }

    pub fn deposit_sol(ctx: Context<DepositSol>, amount: u64) -> Result<u64> {
        instructions::deposit_sol(ctx, amount)
    }

    pub fn withdraw_sol(ctx: Context<WithdrawSol>, amount: u64) -> Result<u64> {
        instructions::withdraw_sol(ctx, amount)
    }

    pub fn buy_sol(ctx: Context<BuySol>, buy_size: u64) -> Result<u64> {
        instructions::buy_sol(ctx, buy_size)
    }

    pub fn set_swap_enabled(ctx: Context<SetSwapEnabled>, enabled: bool) -> Result<()> {
        instructions::set_swap_enabled(ctx, enabled)
    }
}
