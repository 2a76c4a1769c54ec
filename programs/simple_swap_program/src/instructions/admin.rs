use anchor_lang::prelude::*;

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED};
use crate::engine;
use crate::events::SwapToggled;
use crate::guard::VerifiedSigner;
use crate::state::*;

/// Turns fixed-rate SOL purchases on or off. Token-side authority only.
pub fn set_swap_enabled(ctx: Context<SetSwapEnabled>, enabled: bool) -> Result<()> {
    let signer = VerifiedSigner::from_signer(&ctx.accounts.authority);
    let vault_key = ctx.accounts.vault.key();
    engine::set_swap_enabled(&mut ctx.accounts.token_vault, &vault_key, &signer, enabled)?;

    emit!(SwapToggled {
        token_vault: ctx.accounts.token_vault.key(),
        authority: signer.key(),
        enabled,
    });
    msg!("SOL purchase toggled to: {}", enabled);
    Ok(())
}

#[derive(Accounts)]
pub struct SetSwapEnabled<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, vault.key().as_ref()],
        bump = token_vault.bump
    )]
    pub token_vault: Account<'info, TokenVault>,
}
