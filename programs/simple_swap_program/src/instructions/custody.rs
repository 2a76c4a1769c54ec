use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{TOKEN_VAULT_SEED, VAULT_SEED, VAULT_TOKEN_ACCOUNT_SEED};
use crate::engine;
use crate::events::{SolDeposited, SolWithdrawn, VaultInitialized};
use crate::guard::VerifiedSigner;
use crate::state::*;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = VerifiedSigner::from_signer(&ctx.accounts.authority);
    engine::initialize(&mut ctx.accounts.vault, &authority, ctx.bumps.vault, None)?;

    emit!(VaultInitialized {
        vault: ctx.accounts.vault.key(),
        authority: authority.key(),
        token_vault: None,
        mint: None,
    });
    msg!("Vault initialized for authority: {}", authority.key());
    Ok(())
}

/// Same as `initialize`, plus a token vault holding `mint`.
/// `token_authority` defaults to the vault authority.
pub fn initialize_with_mint(ctx: Context<InitializeWithMint>, token_authority: Option<Pubkey>) -> Result<()> {
    let authority = VerifiedSigner::from_signer(&ctx.accounts.authority);
    let params = TokenVaultParams {
        vault: ctx.accounts.vault.key(),
        authority: token_authority.unwrap_or_else(|| authority.key()),
        mint: ctx.accounts.mint.key(),
        token_account: ctx.accounts.vault_token_account.key(),
        bump: ctx.bumps.token_vault,
    };

    engine::initialize(
        &mut *ctx.accounts.vault,
        &authority,
        ctx.bumps.vault,
        Some((&mut *ctx.accounts.token_vault, params)),
    )?;

    emit!(VaultInitialized {
        vault: params.vault,
        authority: authority.key(),
        token_vault: Some(ctx.accounts.token_vault.key()),
        mint: Some(params.mint),
    });
    msg!(
        "Vault initialized for authority: {} with token vault for mint: {}",
        authority.key(),
        params.mint
    );
    Ok(())
}

pub fn deposit_sol(ctx: Context<DepositSol>, amount: u64) -> Result<u64> {
    let signer = VerifiedSigner::from_signer(&ctx.accounts.signer);
    let new_balance = engine::deposit_sol(&mut ctx.accounts.vault, &signer, amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.signer.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, amount)?;

    emit!(SolDeposited {
        vault: ctx.accounts.vault.key(),
        signer: signer.key(),
        amount,
        new_balance,
    });
    msg!("Deposited {} lamports to vault. Balance: {}", amount, new_balance);
    Ok(new_balance)
}

pub fn withdraw_sol(ctx: Context<WithdrawSol>, amount: u64) -> Result<u64> {
    let signer = VerifiedSigner::from_signer(&ctx.accounts.signer);
    let new_balance = engine::withdraw_sol(&mut ctx.accounts.vault, &signer, amount)?;

    // Vault is program-owned, so lamports move without a system CPI.
    **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.signer.to_account_info().try_borrow_mut_lamports()? += amount;

    emit!(SolWithdrawn {
        vault: ctx.accounts.vault.key(),
        signer: signer.key(),
        amount,
        new_balance,
    });
    msg!("Withdrew {} lamports from vault. Balance: {}", amount, new_balance);
    Ok(new_balance)
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Vault::SPACE,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitializeWithMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Vault::SPACE,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        space = TokenVault::SPACE,
        seeds = [TOKEN_VAULT_SEED, vault.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenVault>,

    #[account(
        init_if_needed,
        payer = authority,
        token::mint = mint,
        token::authority = token_vault,
        seeds = [VAULT_TOKEN_ACCOUNT_SEED, token_vault.key().as_ref()],
        bump
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

// Seeds are derived from the stored authority, not the signer, so a foreign
// signer reaches the guard and fails with `Unauthorized`.
#[derive(Accounts)]
pub struct DepositSol<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}
