use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{TOKEN_RELEASE_SEED, TOKEN_VAULT_SEED, WALLET_SEED};
use crate::engine::Holdings;
use crate::error::VestingWalletError;
use crate::state::{TokenRelease, VestingWallet, WalletQuote};

use super::WalletQuoted;

pub fn quote_token(ctx: Context<QuoteToken>) -> Result<WalletQuote> {
    let now = Clock::get()?.unix_timestamp;
    let w = &ctx.accounts.wallet;
    let ledger = &ctx.accounts.token_release;
    let holdings = Holdings::new(ctx.accounts.token_vault.amount, ledger.released);
    let quote = w.quote(holdings, now)?;

    emit!(WalletQuoted {
        wallet: w.key(),
        mint: Some(ledger.mint),
        quote: quote.clone(),
    });
    Ok(quote)
}

#[derive(Accounts)]
pub struct QuoteToken<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    #[account(
        seeds = [TOKEN_RELEASE_SEED, wallet.key().as_ref(), token_release.mint.as_ref()],
        bump = token_release.bump
    )]
    pub token_release: Account<'info, TokenRelease>,

    #[account(
        seeds = [TOKEN_VAULT_SEED, wallet.key().as_ref(), token_release.mint.as_ref()],
        bump,
        constraint = token_vault.mint == token_release.mint @ VestingWalletError::InvalidTokenMint,
    )]
    pub token_vault: Account<'info, TokenAccount>,
}
