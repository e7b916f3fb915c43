use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::signature::{self as policy, Secp256k1Syscall};
use crate::state::VestingWallet;

/// Returns `SIGNATURE_VALID` or `SIGNATURE_INVALID`; malformed input is an
/// answer, not an error.
pub fn is_valid_signature(
    ctx: Context<IsValidSignature>,
    digest: [u8; 32],
    signature: Vec<u8>,
) -> Result<[u8; 4]> {
    Ok(policy::is_valid_signature(
        &Secp256k1Syscall,
        &ctx.accounts.wallet.signing_key,
        &digest,
        &signature,
    ))
}

#[derive(Accounts)]
pub struct IsValidSignature<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,
}
