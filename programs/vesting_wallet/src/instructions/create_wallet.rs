use anchor_lang::prelude::*;

use crate::constants::WALLET_SEED;
use crate::engine::{RevocationMode, Schedule, SignerAddress, VestingMode};
use crate::error::VestingWalletError;
use crate::state::VestingWallet;

use super::RevokerChanged;

pub fn create_wallet(
    ctx: Context<CreateWallet>,
    wallet_id: u64,
    start: i64,
    duration: u64,
    cliff: u64,
    revoker: Pubkey,
    signing_key: SignerAddress,
) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();
    require!(beneficiary != Pubkey::default(), VestingWalletError::NullBeneficiary);
    let revocation = RevocationMode::active(revoker)?;

    // Both offsets must be representable for the wallet's whole lifetime.
    let schedule = Schedule::new(start, duration, cliff);
    let cliff_end = schedule.cliff_end()?;
    schedule.end()?;

    let w = &mut ctx.accounts.wallet;
    w.beneficiary = beneficiary;
    w.wallet_id = wallet_id;
    w.start = start;
    w.duration = duration;
    w.cliff = cliff;
    w.vesting_mode = VestingMode::Scheduled;
    w.revocation = revocation;
    w.released_native = 0;
    w.signing_key = signing_key;
    w.bump = ctx.bumps.wallet;

    msg!("vesting wallet {} created, cliff ends at {}", w.key(), cliff_end);

    emit!(WalletCreated {
        wallet: w.key(),
        beneficiary,
        wallet_id,
        start,
        duration,
        cliff,
    });
    emit!(RevokerChanged {
        wallet: w.key(),
        previous: None,
        new: Some(revoker),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet_id: u64)]
pub struct CreateWallet<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VestingWallet::SIZE,
        seeds = [WALLET_SEED, beneficiary.key().as_ref(), &wallet_id.to_le_bytes()],
        bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    /// CHECK: Only the key is recorded; the beneficiary does not sign creation.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct WalletCreated {
    pub wallet: Pubkey,
    pub beneficiary: Pubkey,
    pub wallet_id: u64,
    pub start: i64,
    pub duration: u64,
    pub cliff: u64,
}
