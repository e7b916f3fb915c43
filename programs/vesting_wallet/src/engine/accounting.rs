//! Released / releasable / revokable maths for one asset.
//!
//! The allocation base is always `held + released`: the current custody
//! balance plus everything already paid out. A revocation removes funds from
//! `held` without touching `released`, so later evaluations see the smaller
//! base and the revoked funds can never become releasable again.

use crate::engine::{RevocationMode, Schedule, VestingMode};
use crate::error::VestingWalletError;

/// Balance snapshot of one asset, captured once per instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Holdings {
    /// Amount currently in custody.
    pub held: u64,
    /// Cumulative amount released to the beneficiary.
    pub released: u64,
}

impl Holdings {
    pub fn new(held: u64, released: u64) -> Self {
        Self { held, released }
    }

    pub fn total_allocation(&self) -> Result<u64, VestingWalletError> {
        self.held
            .checked_add(self.released)
            .ok_or(VestingWalletError::MathOverflow)
    }
}

/// Schedule and mode axes of a wallet, borrowed for one evaluation.
#[derive(Clone, Copy, Debug)]
pub struct Terms<'a> {
    pub schedule: &'a Schedule,
    pub vesting: VestingMode,
    pub revocation: &'a RevocationMode,
}

impl<'a> Terms<'a> {
    pub fn vested_amount(&self, holdings: Holdings, now: i64) -> Result<u64, VestingWalletError> {
        self.schedule
            .vested_amount(self.vesting, holdings.total_allocation()?, now)
    }

    /// Vested but not yet released. Fails rather than clamping when an earlier
    /// revocation shrank the base below what was already paid out.
    pub fn releasable_amount(&self, holdings: Holdings, now: i64) -> Result<u64, VestingWalletError> {
        self.vested_amount(holdings, now)?
            .checked_sub(holdings.released)
            .ok_or(VestingWalletError::ReleasedExceedsVested)
    }

    /// Unvested remainder the revoker may reclaim. Zero once renounced or
    /// accelerated.
    pub fn revokable_amount(&self, holdings: Holdings, now: i64) -> Result<u64, VestingWalletError> {
        if !self.revocation.is_revokable() || self.vesting.is_accelerated() {
            return Ok(0);
        }
        holdings
            .total_allocation()?
            .checked_sub(self.vested_amount(holdings, now)?)
            .ok_or(VestingWalletError::RevokableUnderflow)
    }
}

/// Lamports in custody once the account's rent-exempt reserve is set aside.
pub fn native_held(lamports: u64, rent_reserve: u64) -> Result<u64, VestingWalletError> {
    lamports
        .checked_sub(rent_reserve)
        .ok_or(VestingWalletError::InsufficientNativeBalance)
}
