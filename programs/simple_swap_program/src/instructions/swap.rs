use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED};
use crate::engine::{self, TokenLegs};
use crate::events::SolBought;
use crate::guard::VerifiedSigner;
use crate::state::*;

/// Buys SOL from the vault at `FIXED_RATE`, paying `buy_size` tokens into the
/// vault's token account. Returns the lamports received.
///
/// Fixed-rate placeholder: disabled until the token authority calls
/// `set_swap_enabled`.
pub fn buy_sol(ctx: Context<BuySol>, buy_size: u64) -> Result<u64> {
    let signer = VerifiedSigner::from_signer(&ctx.accounts.signer);
    let vault_key = ctx.accounts.vault.key();
    let legs = TokenLegs {
        from_mint: ctx.accounts.from_token_account.mint,
        to_account: ctx.accounts.to_token_account.key(),
        to_mint: ctx.accounts.to_token_account.mint,
    };

    let outcome = engine::buy_sol(
        &mut ctx.accounts.vault,
        &vault_key,
        &ctx.accounts.token_vault,
        &signer,
        &legs,
        buy_size,
    )?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.from_token_account.to_account_info(),
        to: ctx.accounts.to_token_account.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, buy_size)?;

    if outcome.sol_received > 0 {
        **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= outcome.sol_received;
        **ctx.accounts.signer.to_account_info().try_borrow_mut_lamports()? += outcome.sol_received;
    }

    emit!(SolBought {
        vault: vault_key,
        token_vault: ctx.accounts.token_vault.key(),
        signer: signer.key(),
        buy_size,
        sol_received: outcome.sol_received,
        new_balance: outcome.new_balance,
    });
    msg!(
        "Bought {} lamports for {} tokens. Vault balance: {}",
        outcome.sol_received,
        buy_size,
        outcome.new_balance
    );
    Ok(outcome.sol_received)
}

#[derive(Accounts)]
pub struct BuySol<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [TOKEN_VAULT_SEED, vault.key().as_ref()],
        bump = token_vault.bump
    )]
    pub token_vault: Account<'info, TokenVault>,

    /// Caller's token account paying for the SOL.
    #[account(mut)]
    pub from_token_account: Account<'info, TokenAccount>,

    /// Must be `token_vault.token_account`; checked by the engine.
    #[account(mut)]
    pub to_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
