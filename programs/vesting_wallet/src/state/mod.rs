pub mod token_release;
pub mod vesting_wallet;

pub use token_release::*;
pub use vesting_wallet::*;
