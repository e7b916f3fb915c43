//! Program-wide constants.

/// Seed prefix for the `VestingWallet` PDA.
pub const WALLET_SEED: &[u8] = b"vesting_wallet";

/// Seed prefix for the per-mint token vault owned by a wallet.
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

/// Seed prefix for the per-mint released-amount ledger.
pub const TOKEN_RELEASE_SEED: &[u8] = b"token_release";

/// Returned by `is_valid_signature` when the signer is the wallet's signing key
/// (ERC-1271 magic value, `bytes4(keccak256("isValidSignature(bytes32,bytes)"))`).
pub const SIGNATURE_VALID: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];

/// Returned by `is_valid_signature` for every other input.
pub const SIGNATURE_INVALID: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Length of an `(r, s, v)` encoded secp256k1 signature.
pub const SIGNATURE_LEN: usize = 65;

/// secp256k1 curve order divided by two. Signatures with a larger `s` are
/// the malleable twin of a low-s signature and are refused.
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, //
    0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Length of an Ethereum-style address derived from a secp256k1 public key.
pub const SIGNER_ADDRESS_LEN: usize = 20;
