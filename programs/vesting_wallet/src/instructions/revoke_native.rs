use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::{native_held, require_revoker, Holdings};
use crate::state::VestingWallet;

/// Sends the unvested lamports to the revoker. A zero amount is not an error.
pub fn revoke_native(ctx: Context<RevokeNative>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let wallet_ai = ctx.accounts.wallet.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(wallet_ai.data_len());

    let w = &ctx.accounts.wallet;
    let revoker = require_revoker(&w.revocation, &ctx.accounts.revoker.key())?;

    let holdings = Holdings::new(native_held(wallet_ai.lamports(), rent_reserve)?, w.released_native);
    let amount = w.with_terms(|t| t.revokable_amount(holdings, now))?;

    if amount > 0 {
        w.sub_lamports(amount)?;
        ctx.accounts.revoker.add_lamports(amount)?;
    }

    msg!("revoked {} lamports at {}", amount, now);

    emit!(NativeRevoked {
        wallet: w.key(),
        revoker,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeNative<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    #[account(mut)]
    pub revoker: Signer<'info>,
}

#[event]
pub struct NativeRevoked {
    pub wallet: Pubkey,
    pub revoker: Pubkey,
    pub amount: u64,
}
