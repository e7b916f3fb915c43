//! Cliff-gated linear vesting.
//!
//! Evaluating `vested_amount(total, now)`:
//! - an accelerated wallet is fully vested at every timestamp,
//! - otherwise nothing is vested before `start + cliff`,
//! - otherwise the linear baseline applies.
//!
//! Crossing the cliff is a step: the amount jumps straight to whatever the
//! linear baseline already owes at that instant.

use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::error::VestingWalletError;

/// Whether the linear schedule still governs vesting. One-way:
/// `Scheduled -> Accelerated`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingMode {
    Scheduled,
    Accelerated,
}

impl VestingMode {
    pub const SIZE: usize = 1;

    pub fn is_accelerated(&self) -> bool {
        matches!(self, VestingMode::Accelerated)
    }

    /// Returns `true` if this call performed the transition.
    pub fn accelerate(&mut self) -> bool {
        let changed = !self.is_accelerated();
        *self = VestingMode::Accelerated;
        changed
    }
}

/// Immutable time parameters of a wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Unix seconds at which linear vesting starts.
    pub start: i64,
    /// Seconds from `start` until the baseline is fully vested.
    pub duration: u64,
    /// Seconds from `start` before anything vests. May exceed `duration`.
    pub cliff: u64,
}

impl Schedule {
    pub fn new(start: i64, duration: u64, cliff: u64) -> Self {
        Self {
            start,
            duration,
            cliff,
        }
    }

    pub fn cliff_end(&self) -> Result<i64, VestingWalletError> {
        offset(self.start, self.cliff)
    }

    pub fn end(&self) -> Result<i64, VestingWalletError> {
        offset(self.start, self.duration)
    }

    pub fn is_past_cliff(&self, now: i64) -> Result<bool, VestingWalletError> {
        Ok(now >= self.cliff_end()?)
    }

    /// Linear baseline: 0 before `start`, `total` from `start + duration`,
    /// `total * elapsed / duration` in between (rounded down).
    pub fn baseline_vested(&self, total: u64, now: i64) -> Result<u64, VestingWalletError> {
        if now < self.start {
            return Ok(0);
        }
        let elapsed = now
            .checked_sub(self.start)
            .ok_or(VestingWalletError::MathOverflow)? as u64;
        if elapsed >= self.duration {
            return Ok(total);
        }
        let v = (total as u128)
            .checked_mul(elapsed as u128)
            .ok_or(VestingWalletError::MathOverflow)?
            / (self.duration as u128);
        u64::try_from(v).map_err(|_| VestingWalletError::MathOverflow)
    }

    /// Amount of `total` vested at `now` once cliff and acceleration apply.
    /// Acceleration overrides the cliff: an accelerated wallet is fully
    /// vested even before `cliff_end`.
    pub fn vested_amount(
        &self,
        mode: VestingMode,
        total: u64,
        now: i64,
    ) -> Result<u64, VestingWalletError> {
        if mode.is_accelerated() {
            return Ok(total);
        }
        if !self.is_past_cliff(now)? {
            return Ok(0);
        }
        self.baseline_vested(total, now)
    }
}

fn offset(start: i64, seconds: u64) -> Result<i64, VestingWalletError> {
    let seconds = i64::try_from(seconds).map_err(|_| VestingWalletError::InvalidTimestamp)?;
    start
        .checked_add(seconds)
        .ok_or(VestingWalletError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        Schedule::new(0, 400, 100)
    }

    #[test]
    fn nothing_vests_before_cliff() {
        let s = schedule();
        for t in [-10, 0, 50, 99] {
            assert_eq!(s.vested_amount(VestingMode::Scheduled, 1_000, t).unwrap(), 0);
        }
    }

    #[test]
    fn cliff_jumps_to_linear_amount() {
        let s = schedule();
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 1_000, 100).unwrap(), 250);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 1_000, 300).unwrap(), 750);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 1_000, 400).unwrap(), 1_000);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 1_000, 500).unwrap(), 1_000);
    }

    #[test]
    fn acceleration_vests_everything_even_before_cliff() {
        let s = schedule();
        for t in [-5, 0, 60, 100, 1_000] {
            assert_eq!(s.vested_amount(VestingMode::Accelerated, 1_000, t).unwrap(), 1_000);
        }
    }

    #[test]
    fn cliff_beyond_duration_delays_everything() {
        let s = Schedule::new(1_000, 100, 500);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 90, 1_200).unwrap(), 0);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 90, 1_500).unwrap(), 90);
    }

    #[test]
    fn zero_duration_vests_at_start() {
        let s = Schedule::new(10, 0, 0);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 7, 9).unwrap(), 0);
        assert_eq!(s.vested_amount(VestingMode::Scheduled, 7, 10).unwrap(), 7);
    }

    #[test]
    fn linear_rounds_down_and_survives_large_totals() {
        let s = Schedule::new(0, 3, 0);
        assert_eq!(s.baseline_vested(10, 1).unwrap(), 3);
        assert_eq!(s.baseline_vested(u64::MAX, 2).unwrap(), u64::MAX / 3 * 2);
    }

    #[test]
    fn cliff_end_overflow_is_reported() {
        let s = Schedule::new(i64::MAX, 10, 1);
        assert!(matches!(s.cliff_end(), Err(VestingWalletError::MathOverflow)));
        let s = Schedule::new(0, 10, u64::MAX);
        assert!(matches!(s.cliff_end(), Err(VestingWalletError::InvalidTimestamp)));
    }

    #[test]
    fn accelerate_is_one_way() {
        let mut mode = VestingMode::Scheduled;
        assert!(mode.accelerate());
        assert!(!mode.accelerate());
        assert!(mode.is_accelerated());
    }
}
