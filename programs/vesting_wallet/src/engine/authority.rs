//! Role guards and the revoker state machine.

use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::error::VestingWalletError;

/// Who may revoke and accelerate. One-way: `Active -> Renounced`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevocationMode {
    Active(Pubkey),
    Renounced,
}

impl RevocationMode {
    /// Tag byte plus the largest payload.
    pub const SIZE: usize = 1 + 32;

    /// Initial mode of a new wallet. The null identity is refused; a wallet is
    /// always created revokable.
    pub fn active(revoker: Pubkey) -> Result<Self, VestingWalletError> {
        if revoker == Pubkey::default() {
            return Err(VestingWalletError::NullRevoker);
        }
        Ok(RevocationMode::Active(revoker))
    }

    pub fn revoker(&self) -> Option<Pubkey> {
        match self {
            RevocationMode::Active(k) => Some(*k),
            RevocationMode::Renounced => None,
        }
    }

    pub fn is_revokable(&self) -> bool {
        self.revoker().is_some()
    }
}

/// Previous and new revoker of a successful transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevokerChange {
    pub previous: Option<Pubkey>,
    pub new: Option<Pubkey>,
}

pub fn require_beneficiary(beneficiary: &Pubkey, caller: &Pubkey) -> Result<(), VestingWalletError> {
    if beneficiary != caller {
        return Err(VestingWalletError::NotBeneficiary);
    }
    Ok(())
}

/// A renounced wallet has no revoker, so every caller fails here.
pub fn require_revoker(mode: &RevocationMode, caller: &Pubkey) -> Result<Pubkey, VestingWalletError> {
    match mode {
        RevocationMode::Active(revoker) if revoker == caller => Ok(*revoker),
        _ => Err(VestingWalletError::NotRevoker),
    }
}

/// Hands the role to `new`. Use [`renounce`] to clear it.
pub fn change_revoker(
    mode: &mut RevocationMode,
    caller: &Pubkey,
    new: Pubkey,
) -> Result<RevokerChange, VestingWalletError> {
    let previous = require_revoker(mode, caller)?;
    *mode = RevocationMode::active(new)?;
    Ok(RevokerChange {
        previous: Some(previous),
        new: Some(new),
    })
}

pub fn renounce(mode: &mut RevocationMode, caller: &Pubkey) -> Result<RevokerChange, VestingWalletError> {
    let previous = require_revoker(mode, caller)?;
    *mode = RevocationMode::Renounced;
    Ok(RevokerChange {
        previous: Some(previous),
        new: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_size_fits_account_layout() {
        let mut active = Vec::new();
        RevocationMode::Active(Pubkey::new_unique())
            .serialize(&mut active)
            .unwrap();
        assert_eq!(active.len(), RevocationMode::SIZE);

        let mut renounced = Vec::new();
        RevocationMode::Renounced.serialize(&mut renounced).unwrap();
        assert_eq!(renounced, vec![1u8]);

        let decoded = RevocationMode::deserialize(&mut active.as_slice()).unwrap();
        assert!(decoded.is_revokable());
    }

    #[test]
    fn construction_rejects_null_revoker() {
        assert!(matches!(
            RevocationMode::active(Pubkey::default()),
            Err(VestingWalletError::NullRevoker)
        ));
    }

    #[test]
    fn only_current_revoker_passes_guard() {
        let revoker = Pubkey::new_unique();
        let mode = RevocationMode::active(revoker).unwrap();
        assert_eq!(require_revoker(&mode, &revoker).unwrap(), revoker);
        assert!(matches!(
            require_revoker(&mode, &Pubkey::new_unique()),
            Err(VestingWalletError::NotRevoker)
        ));
    }

    #[test]
    fn beneficiary_guard() {
        let b = Pubkey::new_unique();
        assert!(require_beneficiary(&b, &b).is_ok());
        assert!(matches!(
            require_beneficiary(&b, &Pubkey::new_unique()),
            Err(VestingWalletError::NotBeneficiary)
        ));
    }

    #[test]
    fn change_revoker_moves_the_role() {
        let old = Pubkey::new_unique();
        let new = Pubkey::new_unique();
        let mut mode = RevocationMode::active(old).unwrap();

        let change = change_revoker(&mut mode, &old, new).unwrap();
        assert_eq!(change.previous, Some(old));
        assert_eq!(change.new, Some(new));
        assert_eq!(mode.revoker(), Some(new));
        assert!(matches!(
            require_revoker(&mode, &old),
            Err(VestingWalletError::NotRevoker)
        ));
    }

    #[test]
    fn change_revoker_to_null_is_refused_and_leaves_mode() {
        let old = Pubkey::new_unique();
        let mut mode = RevocationMode::active(old).unwrap();
        assert!(matches!(
            change_revoker(&mut mode, &old, Pubkey::default()),
            Err(VestingWalletError::NullRevoker)
        ));
        assert_eq!(mode, RevocationMode::Active(old));
    }

    #[test]
    fn stranger_cannot_change_revoker() {
        let old = Pubkey::new_unique();
        let mut mode = RevocationMode::active(old).unwrap();
        assert!(matches!(
            change_revoker(&mut mode, &Pubkey::new_unique(), Pubkey::new_unique()),
            Err(VestingWalletError::NotRevoker)
        ));
        assert_eq!(mode.revoker(), Some(old));
    }

    #[test]
    fn renounce_is_terminal() {
        let old = Pubkey::new_unique();
        let mut mode = RevocationMode::active(old).unwrap();

        let change = renounce(&mut mode, &old).unwrap();
        assert_eq!(change.new, None);
        assert!(!mode.is_revokable());

        assert!(matches!(renounce(&mut mode, &old), Err(VestingWalletError::NotRevoker)));
        assert!(matches!(
            change_revoker(&mut mode, &old, old),
            Err(VestingWalletError::NotRevoker)
        ));
        assert!(matches!(
            require_revoker(&mode, &Pubkey::default()),
            Err(VestingWalletError::NotRevoker)
        ));
    }
}
