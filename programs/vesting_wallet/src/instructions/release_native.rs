use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::{native_held, require_beneficiary, Holdings};
use crate::error::VestingWalletError;
use crate::state::VestingWallet;

pub fn release_native(ctx: Context<ReleaseNative>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let wallet_ai = ctx.accounts.wallet.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(wallet_ai.data_len());
    let beneficiary = ctx.accounts.beneficiary.key();

    let w = &mut ctx.accounts.wallet;
    require_beneficiary(&w.beneficiary, &beneficiary)?;

    let holdings = Holdings::new(native_held(wallet_ai.lamports(), rent_reserve)?, w.released_native);
    let amount = w.with_terms(|t| t.releasable_amount(holdings, now))?;

    w.released_native = w
        .released_native
        .checked_add(amount)
        .ok_or(VestingWalletError::MathOverflow)?;
    let released_total = w.released_native;

    if amount > 0 {
        w.sub_lamports(amount)?;
        ctx.accounts.beneficiary.add_lamports(amount)?;
    }

    msg!("released {} lamports at {}", amount, now);

    emit!(NativeReleased {
        wallet: ctx.accounts.wallet.key(),
        beneficiary,
        amount,
        released_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseNative<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,
}

#[event]
pub struct NativeReleased {
    pub wallet: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
