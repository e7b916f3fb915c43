use anchor_lang::prelude::*;

use crate::engine::{Holdings, RevocationMode, Schedule, Terms, VestingMode};
use crate::error::VestingWalletError;

/// Custody account PDA: holds lamports directly and owns one token vault per
/// mint. Seeds: `[b"vesting_wallet", beneficiary, wallet_id.to_le_bytes()]`.
#[account]
pub struct VestingWallet {
    /// Receives released funds and gates beneficiary-only instructions.
    pub beneficiary: Pubkey,
    /// Disambiguates several wallets of the same beneficiary.
    pub wallet_id: u64,
    /// Vesting start (Unix seconds, UTC).
    pub start: i64,
    /// Seconds from start until fully vested.
    pub duration: u64,
    /// Seconds from start before anything vests.
    pub cliff: u64,
    pub vesting_mode: VestingMode,
    pub revocation: RevocationMode,
    /// Lamports released to the beneficiary so far.
    pub released_native: u64,
    /// Ethereum-style address whose signatures `is_valid_signature` accepts.
    pub signing_key: [u8; 20],
    pub bump: u8,
}

impl VestingWallet {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // wallet_id
        8 +  // start
        8 +  // duration
        8 +  // cliff
        VestingMode::SIZE +
        RevocationMode::SIZE +
        8 +  // released_native
        20 + // signing_key
        1;   // bump

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.start, self.duration, self.cliff)
    }

    pub fn cliff(&self) -> u64 {
        self.cliff
    }

    pub fn cliff_end(&self) -> std::result::Result<i64, VestingWalletError> {
        self.schedule().cliff_end()
    }

    pub fn is_past_cliff(&self, now: i64) -> std::result::Result<bool, VestingWalletError> {
        self.schedule().is_past_cliff(now)
    }

    pub fn is_accelerated(&self) -> bool {
        self.vesting_mode.is_accelerated()
    }

    pub fn revoker(&self) -> Option<Pubkey> {
        self.revocation.revoker()
    }

    pub fn is_revokable(&self) -> bool {
        self.revocation.is_revokable()
    }

    /// Every read-only figure for one asset, evaluated at a single `now`.
    pub fn quote(&self, holdings: Holdings, now: i64) -> std::result::Result<WalletQuote, VestingWalletError> {
        let (vested, releasable, revokable) = self.with_terms(|t| {
            // Only a release can fail on a revoked-below-released base.
            let releasable = match t.releasable_amount(holdings, now) {
                Ok(amount) => Some(amount),
                Err(VestingWalletError::ReleasedExceedsVested) => None,
                Err(e) => return Err(e),
            };
            Ok::<_, VestingWalletError>((
                t.vested_amount(holdings, now)?,
                releasable,
                t.revokable_amount(holdings, now)?,
            ))
        })?;
        Ok(WalletQuote {
            now,
            cliff: self.cliff(),
            cliff_end: self.cliff_end()?,
            is_past_cliff: self.is_past_cliff(now)?,
            is_accelerated: self.is_accelerated(),
            revoker: self.revoker(),
            is_revokable: self.is_revokable(),
            held: holdings.held,
            released: holdings.released,
            vested,
            releasable,
            revokable,
        })
    }

    /// Runs `f` against this wallet's current terms.
    pub fn with_terms<T>(&self, f: impl FnOnce(Terms<'_>) -> T) -> T {
        let schedule = self.schedule();
        f(Terms {
            schedule: &schedule,
            vesting: self.vesting_mode,
            revocation: &self.revocation,
        })
    }
}

/// Returned by the quote instructions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WalletQuote {
    pub now: i64,
    pub cliff: u64,
    pub cliff_end: i64,
    pub is_past_cliff: bool,
    pub is_accelerated: bool,
    pub revoker: Option<Pubkey>,
    pub is_revokable: bool,
    pub held: u64,
    pub released: u64,
    pub vested: u64,
    /// `None` while a revocation has left `released` above `vested`.
    pub releasable: Option<u64>,
    pub revokable: u64,
}
