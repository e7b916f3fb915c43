use anchor_lang::prelude::*;

/// Custom error codes for the vesting wallet program.
#[error_code]
pub enum VestingWalletError {
    #[msg("Unauthorized: beneficiary signature required")]
    NotBeneficiary,

    #[msg("Unauthorized: revoker signature required")]
    NotRevoker,

    #[msg("Revoker must not be the null identity")]
    NullRevoker,

    #[msg("Beneficiary must not be the null identity")]
    NullBeneficiary,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Signature must be exactly 65 bytes")]
    InvalidSignatureLength,

    #[msg("Signature s value is above half the curve order")]
    InvalidSignatureS,

    #[msg("Signature v value must be 27 or 28")]
    InvalidSignatureV,

    #[msg("Signature does not recover to a signer")]
    InvalidSigner,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Delegation registry must be an external program")]
    InvalidRegistry,

    #[msg("Native balance is below the rent-exempt reserve")]
    InsufficientNativeBalance,

    #[msg("Vested amount exceeds total allocation")]
    RevokableUnderflow,

    #[msg("Released amount exceeds vested amount")]
    ReleasedExceedsVested,

    #[msg("Math overflow")]
    MathOverflow,
}
