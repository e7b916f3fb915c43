#![allow(unexpected_cfgs)]

//! Revocable vesting wallet.
//!
//! A PDA custodies lamports and SPL tokens for one beneficiary and releases
//! them on a cliff-gated linear schedule. A revoker may claw back whatever has
//! not vested, force full vesting, hand the role on, or renounce it.

use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::WalletQuote;

declare_id!("9J6xs4nyguKgtBe9rDQxkctAUtkAgKaegTnX18oBptSH");

#[program]
pub mod vesting_wallet {
    use super::*;

    pub fn create_wallet(
        ctx: Context<CreateWallet>,
        wallet_id: u64,
        start: i64,
        duration: u64,
        cliff: u64,
        revoker: Pubkey,
        signing_key: [u8; 20],
    ) -> Result<()> {
        instructions::create_wallet(ctx, wallet_id, start, duration, cliff, revoker, signing_key)
    }

    pub fn open_token_vault(ctx: Context<OpenTokenVault>) -> Result<()> {
        instructions::open_token_vault(ctx)
    }

    /// Beneficiary only.
    pub fn release_native(ctx: Context<ReleaseNative>) -> Result<()> {
        instructions::release_native(ctx)
    }

    /// Beneficiary only.
    pub fn release_token(ctx: Context<ReleaseToken>) -> Result<()> {
        instructions::release_token(ctx)
    }

    /// Revoker only.
    pub fn revoke_native(ctx: Context<RevokeNative>) -> Result<()> {
        instructions::revoke_native(ctx)
    }

    /// Revoker only.
    pub fn revoke_token(ctx: Context<RevokeToken>) -> Result<()> {
        instructions::revoke_token(ctx)
    }

    /// Revoker only.
    pub fn accelerate(ctx: Context<Accelerate>) -> Result<()> {
        instructions::accelerate(ctx)
    }

    /// Revoker only.
    pub fn change_revoker(ctx: Context<ChangeRevoker>, new_revoker: Pubkey) -> Result<()> {
        instructions::change_revoker(ctx, new_revoker)
    }

    /// Revoker only.
    pub fn renounce_revokability(ctx: Context<RenounceRevokability>) -> Result<()> {
        instructions::renounce_revokability(ctx)
    }

    /// Beneficiary only.
    pub fn set_signing_key(ctx: Context<SetSigningKey>, signing_key: [u8; 20]) -> Result<()> {
        instructions::set_signing_key(ctx, signing_key)
    }

    /// Beneficiary only.
    pub fn set_delegate(
        ctx: Context<SetDelegate>,
        scope_id: [u8; 32],
        delegate: Pubkey,
    ) -> Result<()> {
        instructions::set_delegate(ctx, scope_id, delegate)
    }

    pub fn is_valid_signature(
        ctx: Context<IsValidSignature>,
        digest: [u8; 32],
        signature: Vec<u8>,
    ) -> Result<[u8; 4]> {
        instructions::is_valid_signature(ctx, digest, signature)
    }

    pub fn quote_native(ctx: Context<QuoteNative>) -> Result<WalletQuote> {
        instructions::quote_native(ctx)
    }

    pub fn quote_token(ctx: Context<QuoteToken>) -> Result<WalletQuote> {
        instructions::quote_token(ctx)
    }
}
