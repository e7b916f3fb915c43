use anchor_lang::prelude::*;

/// Released-amount ledger for one mint held by a wallet.
/// Seeds: `[b"token_release", wallet, mint]`.
#[account]
pub struct TokenRelease {
    pub wallet: Pubkey,
    pub mint: Pubkey,
    /// Tokens released to the beneficiary so far.
    pub released: u64,
    pub bump: u8,
}

impl TokenRelease {
    pub const SIZE: usize =
        32 + // wallet
        32 + // mint
        8 +  // released
        1;   // bump
}
