use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::{native_held, Holdings};
use crate::state::{VestingWallet, WalletQuote};

/// Read-only snapshot of the native asset, returned and emitted.
pub fn quote_native(ctx: Context<QuoteNative>) -> Result<WalletQuote> {
    let now = Clock::get()?.unix_timestamp;
    let wallet_ai = ctx.accounts.wallet.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(wallet_ai.data_len());

    let w = &ctx.accounts.wallet;
    let holdings = Holdings::new(native_held(wallet_ai.lamports(), rent_reserve)?, w.released_native);
    let quote = w.quote(holdings, now)?;

    emit!(WalletQuoted {
        wallet: w.key(),
        mint: None,
        quote: quote.clone(),
    });
    Ok(quote)
}

#[derive(Accounts)]
pub struct QuoteNative<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
}

/// `mint` is `None` for the native asset.
#[event]
pub struct WalletQuoted {
    pub wallet: Pubkey,
    pub mint: Option<Pubkey>,
    pub quote: WalletQuote,
}
