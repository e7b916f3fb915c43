use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};

use crate::constants::WALLET_SEED;
use crate::engine::require_beneficiary;
use crate::error::VestingWalletError;
use crate::state::VestingWallet;

/// Forwards `(scope_id, delegate)` to an external delegation registry with
/// the wallet PDA as signer. The registry's state is not interpreted here.
pub fn set_delegate(ctx: Context<SetDelegate>, scope_id: [u8; 32], delegate: Pubkey) -> Result<()> {
    let w = &ctx.accounts.wallet;
    require_beneficiary(&w.beneficiary, &ctx.accounts.beneficiary.key())?;

    let registry = ctx.accounts.registry.key();
    // The wallet PDA signs this CPI. Its signature must not reach this
    // program, the system program or the token program.
    require!(
        registry != crate::ID
            && registry != anchor_lang::system_program::ID
            && registry != anchor_spl::token::ID,
        VestingWalletError::InvalidRegistry
    );

    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&scope_id);
    data.extend_from_slice(delegate.as_ref());
    let ix = Instruction {
        program_id: registry,
        accounts: vec![AccountMeta::new_readonly(w.key(), true)],
        data,
    };

    let id_bytes = w.wallet_id.to_le_bytes();
    let bump = [w.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[WALLET_SEED, w.beneficiary.as_ref(), &id_bytes, &bump]];
    invoke_signed(
        &ix,
        &[w.to_account_info(), ctx.accounts.registry.to_account_info()],
        signer_seeds,
    )?;

    emit!(DelegateSet {
        wallet: w.key(),
        registry,
        scope_id,
        delegate,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDelegate<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.beneficiary.as_ref(), &wallet.wallet_id.to_le_bytes()],
        bump = wallet.bump
    )]
    pub wallet: Account<'info, VestingWallet>,

    pub beneficiary: Signer<'info>,

    /// CHECK: Arbitrary delegation registry; only required to be executable.
    #[account(executable)]
    pub registry: UncheckedAccount<'info>,
}

#[event]
pub struct DelegateSet {
    pub wallet: Pubkey,
    pub registry: Pubkey,
    pub scope_id: [u8; 32],
    pub delegate: Pubkey,
}
