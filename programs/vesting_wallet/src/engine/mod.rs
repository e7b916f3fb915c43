//! Pure vesting, revocation and signature logic.
//!
//! Nothing here touches accounts, sysvars or CPIs: instruction handlers read
//! the clock and balances once, then hand plain values to these functions.

pub mod accounting;
pub mod authority;
pub mod schedule;
pub mod signature;

pub use accounting::*;
pub use authority::*;
pub use schedule::*;
pub use signature::*;
