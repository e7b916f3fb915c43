pub mod create_wallet;
pub mod open_token_vault;
pub mod release_native;
pub mod release_token;
pub mod revoke_native;
pub mod revoke_token;
pub mod accelerate;
pub mod change_revoker;
pub mod renounce_revokability;
pub mod set_signing_key;
pub mod set_delegate;
pub mod is_valid_signature;
pub mod quote_native;
pub mod quote_token;

pub use create_wallet::*;
pub use open_token_vault::*;
pub use release_native::*;
pub use release_token::*;
pub use revoke_native::*;
pub use revoke_token::*;
pub use accelerate::*;
pub use change_revoker::*;
pub use renounce_revokability::*;
pub use set_signing_key::*;
pub use set_delegate::*;
pub use is_valid_signature::*;
pub use quote_native::*;
pub use quote_token::*;
