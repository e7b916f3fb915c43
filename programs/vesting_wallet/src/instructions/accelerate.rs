use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::require_revoker;
use crate::state::VestingWallet;

/// Irreversibly vests everything. Repeating it only re-emits the event.
pub fn accelerate(ctx: Context<Accelerate>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let w = &mut ctx.accounts.wallet;
    let revoker = require_revoker(&w.revocation, &ctx.accounts.revoker.key())?;

    if !w.vesting_mode.accelerate() {
        msg!("wallet already accelerated");
    }

    emit!(Accelerated {
        wallet: w.key(),
        revoker,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Accelerate<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
    pub revoker: Signer<'info>,
}

#[event]
pub struct Accelerated {
    pub wallet: Pubkey,
    pub revoker: Pubkey,
    pub timestamp: i64,
}
