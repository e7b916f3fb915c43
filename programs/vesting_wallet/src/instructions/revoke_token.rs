use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{TOKEN_RELEASE_SEED, TOKEN_VAULT_SEED, WALLET_SEED};
use crate::engine::{require_revoker, Holdings};
use crate::error::VestingWalletError;
use crate::state::{TokenRelease, VestingWallet};

/// Sends the unvested balance of one mint to the revoker. The released
/// ledger is left alone: the vault shrinks, and with it every later
/// allocation base.
pub fn revoke_token(ctx: Context<RevokeToken>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let w = &ctx.accounts.wallet;
    let revoker = require_revoker(&w.revocation, &ctx.accounts.revoker.key())?;

    let holdings = Holdings::new(ctx.accounts.token_vault.amount, ctx.accounts.token_release.released);
    let amount = w.with_terms(|t| t.revokable_amount(holdings, now))?;

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
                    to: ctx.accounts.revoker_token_account.to_account_info(),
                    authority: w.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            ctx.accounts.mint.decimals,
        )?;
    }

    msg!("revoked {} of mint {} at {}", amount, ctx.accounts.mint.key(), now);

    emit!(TokenRevoked {
        wallet: w.key(),
        mint: ctx.accounts.mint.key(),
        revoker,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeToken<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    #[account(
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
        constraint = revoker_token_account.mint == mint.key() @ VestingWalletError::InvalidTokenMint,
        constraint = revoker_token_account.owner == revoker.key() @ VestingWalletError::InvalidTokenAccount,
    )]
    pub revoker_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub revoker: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokenRevoked {
    pub wallet: Pubkey,
    pub mint: Pubkey,
    pub revoker: Pubkey,
    pub amount: u64,
}
