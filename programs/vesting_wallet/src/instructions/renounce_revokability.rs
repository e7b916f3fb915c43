use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::renounce;
use crate::state::VestingWallet;

use super::RevokerChanged;

/// Clears the revoker for good. Revocation and acceleration become
/// unreachable.
pub fn renounce_revokability(ctx: Context<RenounceRevokability>) -> Result<()> {
    let w = &mut ctx.accounts.wallet;
    let change = renounce(&mut w.revocation, &ctx.accounts.revoker.key())?;

    emit!(RevokerChanged {
        wallet: w.key(),
        previous: change.previous,
        new: change.new,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RenounceRevokability<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
    pub revoker: Signer<'info>,
}
