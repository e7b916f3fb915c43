use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine;
use crate::state::VestingWallet;

pub fn change_revoker(ctx: Context<ChangeRevoker>, new_revoker: Pubkey) -> Result<()> {
    let w = &mut ctx.accounts.wallet;
    let change = engine::change_revoker(&mut w.revocation, &ctx.accounts.revoker.key(), new_revoker)?;

    emit!(RevokerChanged {
        wallet: w.key(),
        previous: change.previous,
        new: change.new,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeRevoker<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
    pub revoker: Signer<'info>,
}

/// Emitted on creation, hand-over and renouncement (`new == None`).
#[event]
pub struct RevokerChanged {
    pub wallet: Pubkey,
    pub previous: Option<Pubkey>,
    pub new: Option<Pubkey>,
}
