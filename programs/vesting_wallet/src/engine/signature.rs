//! Signature authorization for off-chain messages signed by the wallet's
//! secp256k1 signing key.

use bytemuck::{Pod, Zeroable};
use solana_keccak_hasher as keccak;
use solana_secp256k1_recover::secp256k1_recover;

use crate::constants::{
    SECP256K1_HALF_ORDER, SIGNATURE_INVALID, SIGNATURE_LEN, SIGNATURE_VALID, SIGNER_ADDRESS_LEN,
};
use crate::error::VestingWalletError;

pub type SignerAddress = [u8; SIGNER_ADDRESS_LEN];

/// Wire layout of an `(r, s, v)` signature.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RawSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl RawSignature {
    pub fn parse(bytes: &[u8]) -> Result<Self, VestingWalletError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(VestingWalletError::InvalidSignatureLength);
        }
        bytemuck::try_from_bytes::<RawSignature>(bytes)
            .copied()
            .map_err(|_| VestingWalletError::InvalidSignatureLength)
    }

    /// `r || s`, the form the recovery primitive expects.
    pub fn compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }
}

/// Public-key recovery primitive. Returns the Ethereum-style address of the
/// recovered key, or `None` if recovery fails.
pub trait SignerRecovery {
    fn recover(&self, digest: &[u8; 32], recovery_id: u8, compact: &[u8; 64]) -> Option<SignerAddress>;
}

/// Recovery through the `secp256k1_recover` syscall.
pub struct Secp256k1Syscall;

impl SignerRecovery for Secp256k1Syscall {
    fn recover(&self, digest: &[u8; 32], recovery_id: u8, compact: &[u8; 64]) -> Option<SignerAddress> {
        let pubkey = secp256k1_recover(digest, recovery_id, compact).ok()?;
        let hash = keccak::hash(&pubkey.to_bytes()).to_bytes();
        let mut address = [0u8; SIGNER_ADDRESS_LEN];
        address.copy_from_slice(&hash[32 - SIGNER_ADDRESS_LEN..]);
        Some(address)
    }
}

/// Recovers the signer of `digest`. High-s signatures are refused rather
/// than normalized.
pub fn recover_signer<R: SignerRecovery>(
    recovery: &R,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<SignerAddress, VestingWalletError> {
    let sig = RawSignature::parse(signature)?;
    // Big-endian byte arrays compare like the integers they encode.
    if sig.s > SECP256K1_HALF_ORDER {
        return Err(VestingWalletError::InvalidSignatureS);
    }
    let recovery_id = match sig.v {
        27 | 28 => sig.v - 27,
        _ => return Err(VestingWalletError::InvalidSignatureV),
    };
    match recovery.recover(digest, recovery_id, &sig.compact()) {
        Some(address) if address != [0u8; SIGNER_ADDRESS_LEN] => Ok(address),
        _ => Err(VestingWalletError::InvalidSigner),
    }
}

/// ERC-1271 style answer: [`SIGNATURE_VALID`] iff `signature` over `digest`
/// recovers to `signing_key`, [`SIGNATURE_INVALID`] otherwise.
pub fn is_valid_signature<R: SignerRecovery>(
    recovery: &R,
    signing_key: &SignerAddress,
    digest: &[u8; 32],
    signature: &[u8],
) -> [u8; 4] {
    match recover_signer(recovery, digest, signature) {
        Ok(signer) if signer == *signing_key => SIGNATURE_VALID,
        _ => SIGNATURE_INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: SignerAddress = [0xab; SIGNER_ADDRESS_LEN];
    const DIGEST: [u8; 32] = [0x11; 32];

    /// Recovers `address` for recovery id 1 and fails otherwise.
    struct Stub {
        address: Option<SignerAddress>,
    }

    impl SignerRecovery for Stub {
        fn recover(&self, _: &[u8; 32], recovery_id: u8, _: &[u8; 64]) -> Option<SignerAddress> {
            if recovery_id == 1 {
                self.address
            } else {
                None
            }
        }
    }

    fn sig(s: [u8; 32], v: u8) -> Vec<u8> {
        let mut out = vec![0x22; 32];
        out.extend_from_slice(&s);
        out.push(v);
        out
    }

    fn low_s() -> [u8; 32] {
        let mut s = SECP256K1_HALF_ORDER;
        s[31] -= 1;
        s
    }

    fn owner_stub() -> Stub {
        Stub {
            address: Some(OWNER),
        }
    }

    #[test]
    fn owner_signature_is_valid() {
        assert_eq!(
            is_valid_signature(&owner_stub(), &OWNER, &DIGEST, &sig(low_s(), 28)),
            SIGNATURE_VALID
        );
    }

    #[test]
    fn s_equal_to_half_order_is_accepted() {
        let recovered = recover_signer(&owner_stub(), &DIGEST, &sig(SECP256K1_HALF_ORDER, 28));
        assert_eq!(recovered.unwrap(), OWNER);
    }

    #[test]
    fn high_s_is_rejected_even_for_owner() {
        let mut high = SECP256K1_HALF_ORDER;
        high[31] += 1;
        assert!(matches!(
            recover_signer(&owner_stub(), &DIGEST, &sig(high, 28)),
            Err(VestingWalletError::InvalidSignatureS)
        ));
        assert_eq!(
            is_valid_signature(&owner_stub(), &OWNER, &DIGEST, &sig([0xff; 32], 28)),
            SIGNATURE_INVALID
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        let valid = sig(low_s(), 28);
        let mut long = valid.clone();
        long.push(0);
        let candidates: [&[u8]; 3] = [&valid[..64], &long, &[]];
        for bytes in candidates {
            assert!(matches!(
                recover_signer(&owner_stub(), &DIGEST, bytes),
                Err(VestingWalletError::InvalidSignatureLength)
            ));
            assert_eq!(
                is_valid_signature(&owner_stub(), &OWNER, &DIGEST, bytes),
                SIGNATURE_INVALID
            );
        }
    }

    #[test]
    fn v_outside_27_28_is_rejected() {
        for v in [0, 1, 26, 29, 255] {
            assert!(matches!(
                recover_signer(&owner_stub(), &DIGEST, &sig(low_s(), v)),
                Err(VestingWalletError::InvalidSignatureV)
            ));
        }
    }

    #[test]
    fn v_maps_to_recovery_id() {
        // The stub only recovers for id 1, i.e. v = 28.
        assert!(matches!(
            recover_signer(&owner_stub(), &DIGEST, &sig(low_s(), 27)),
            Err(VestingWalletError::InvalidSigner)
        ));
    }

    #[test]
    fn null_or_failed_recovery_is_rejected() {
        let null = Stub {
            address: Some([0u8; SIGNER_ADDRESS_LEN]),
        };
        assert_eq!(
            is_valid_signature(&null, &[0u8; SIGNER_ADDRESS_LEN], &DIGEST, &sig(low_s(), 28)),
            SIGNATURE_INVALID
        );
        let failed = Stub { address: None };
        assert!(matches!(
            recover_signer(&failed, &DIGEST, &sig(low_s(), 28)),
            Err(VestingWalletError::InvalidSigner)
        ));
    }

    #[test]
    fn other_signer_is_invalid() {
        let other = Stub {
            address: Some([0xcd; SIGNER_ADDRESS_LEN]),
        };
        assert_eq!(
            is_valid_signature(&other, &OWNER, &DIGEST, &sig(low_s(), 28)),
            SIGNATURE_INVALID
        );
    }

    /// Secret key 1: its Ethereum address is the keccak tail of the generator.
    const KEY_ONE_ADDRESS: SignerAddress = [
        0x7e, 0x5f, 0x45, 0x52, 0x09, 0x1a, 0x69, 0x12, 0x5d, 0x5d, //
        0xfc, 0xb7, 0xb8, 0xc2, 0x65, 0x90, 0x29, 0x39, 0x5b, 0xdf,
    ];

    /// Secret key 1 over a digest of 0x42 bytes, low-s, v = 28.
    fn key_one_signature() -> Vec<u8> {
        let mut out = Vec::with_capacity(SIGNATURE_LEN);
        out.extend_from_slice(&[
            0xf9, 0x73, 0xa0, 0xb8, 0x70, 0x62, 0xc3, 0x89, 0xd1, 0x25, 0xd8, 0x19, 0x9e, 0x80, 0x3b, 0x83, //
            0x2b, 0x6a, 0xc6, 0xbf, 0x78, 0x67, 0xa4, 0xf6, 0xcd, 0x87, 0x50, 0x60, 0x60, 0xfc, 0x4c, 0x58,
        ]);
        out.extend_from_slice(&[
            0x47, 0x8a, 0x14, 0x35, 0xfb, 0x78, 0x6c, 0x0a, 0x67, 0x1c, 0x5f, 0x91, 0x0c, 0x9b, 0x1d, 0x7a, //
            0xcc, 0xa2, 0xe0, 0x7a, 0x5f, 0x7b, 0x88, 0x15, 0xcc, 0x98, 0xe8, 0xdc, 0x72, 0x5f, 0xaf, 0xca,
        ]);
        out.push(28);
        out
    }

    #[test]
    fn syscall_recovers_ethereum_address() {
        let digest = [0x42; 32];
        let signature = key_one_signature();
        assert_eq!(
            recover_signer(&Secp256k1Syscall, &digest, &signature).unwrap(),
            KEY_ONE_ADDRESS
        );
        assert_eq!(
            is_valid_signature(&Secp256k1Syscall, &KEY_ONE_ADDRESS, &digest, &signature),
            SIGNATURE_VALID
        );
        assert_eq!(
            is_valid_signature(&Secp256k1Syscall, &KEY_ONE_ADDRESS, &DIGEST, &signature),
            SIGNATURE_INVALID
        );
    }

    #[test]
    fn sentinels_are_distinct() {
        assert_eq!(u32::from_be_bytes(SIGNATURE_VALID), 0x1626_ba7e);
        assert_ne!(SIGNATURE_VALID, SIGNATURE_INVALID);
    }
}
