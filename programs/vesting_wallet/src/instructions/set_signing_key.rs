use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::{require_beneficiary, SignerAddress};
use crate::state::VestingWallet;

/// Replaces the secp256k1 address `is_valid_signature` checks against.
pub fn set_signing_key(ctx: Context<SetSigningKey>, signing_key: SignerAddress) -> Result<()> {
    let w = &mut ctx.accounts.wallet;
    require_beneficiary(&w.beneficiary, &ctx.accounts.beneficiary.key())?;

    let previous = w.signing_key;
    w.signing_key = signing_key;

    emit!(SigningKeyChanged {
        wallet: w.key(),
        previous,
        new: signing_key,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetSigningKey<'info> {
    #[account(
        mut,
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
    pub beneficiary: Signer<'info>,
}

#[event]
pub struct SigningKeyChanged {
    pub wallet: Pubkey,
    pub previous: [u8; 20],
    pub new: [u8; 20],
}
