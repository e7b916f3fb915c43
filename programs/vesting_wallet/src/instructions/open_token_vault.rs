use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{TOKEN_RELEASE_SEED, TOKEN_VAULT_SEED, WALLET_SEED};
use crate::state::{TokenRelease, VestingWallet};

/// Prepares custody of `mint`: a vault owned by the wallet PDA and an empty
/// released ledger. Anyone may pay for it.
pub fn open_token_vault(ctx: Context<OpenTokenVault>) -> Result<()> {
    let ledger = &mut ctx.accounts.token_release;
    ledger.wallet = ctx.accounts.wallet.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.released = 0;
    ledger.bump = ctx.bumps.token_release;

    emit!(TokenVaultOpened {
        wallet: ledger.wallet,
        mint: ledger.mint,
        vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct OpenTokenVault<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = wallet,
        seeds = [TOKEN_VAULT_SEED, wallet.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = payer,
        space = 8 + TokenRelease::SIZE,
        seeds = [TOKEN_RELEASE_SEED, wallet.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub token_release: Account<'info, TokenRelease>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenVaultOpened {
    pub wallet: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
