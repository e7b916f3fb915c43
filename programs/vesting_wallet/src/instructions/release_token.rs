use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{TOKEN_RELEASE_SEED, TOKEN_VAULT_SEED, WALLET_SEED};
use crate::engine::{require_beneficiary, Holdings};
use crate::error::VestingWalletError;
use crate::state::{TokenRelease, VestingWallet};

pub fn release_token(ctx: Context<ReleaseToken>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let w = &ctx.accounts.wallet;
    let beneficiary = ctx.accounts.beneficiary.key();
    require_beneficiary(&w.beneficiary, &beneficiary)?;

    let ledger = &mut ctx.accounts.token_release;
    let holdings = Holdings::new(ctx.accounts.token_vault.amount, ledger.released);
    let amount = w.with_terms(|t| t.releasable_amount(holdings, now))?;

    ledger.released = ledger
        .released
        .checked_add(amount)
        .ok_or(VestingWalletError::MathOverflow)?;
    let released_total = ledger.released;

    if amount > 0 {
        let id_bytes = w.wallet_id.to_le_bytes();
        let bump = [w.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[WALLET_SEED, w.beneficiary.as_ref(), &id_bytes, &bump]];
        token::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.token_vault.to_account_info(),
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: w.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            ctx.accounts.mint.decimals,
        )?;
    }

    msg!("released {} of mint {} at {}", amount, ctx.accounts.mint.key(), now);

    emit!(TokenReleased {
        wallet: w.key(),
        mint: ctx.accounts.mint.key(),
        beneficiary,
        amount,
        released_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseToken<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    #[account(
        mut,
        seeds = [TOKEN_RELEASE_SEED, wallet.key().as_ref(), mint.key().as_ref()],
        bump = token_release.bump
    )]
    pub token_release: Account<'info, TokenRelease>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, wallet.key().as_ref(), mint.key().as_ref()],
        bump,
        constraint = token_vault.mint == mint.key() @ VestingWalletError::InvalidTokenMint,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == mint.key() @ VestingWalletError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingWalletError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokenReleased {
    pub wallet: Pubkey,
    pub mint: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
