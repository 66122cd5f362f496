//! Public-input vector assembly for the three statements (S1/S2/S3).
//!
//! Generalises the Phase 2 `ZkPublicInputs`, which only modelled the
//! withdraw statement, into one assembler per statement. The engine
//! does not re-derive the circuit's binding equations — it only
//! assembles the public-input vector from instruction data in the
//! fixed order each statement's circuit expects, validates every
//! element is a canonical Fr element, and hands the vector to the
//! Groth16 verifier.

use anchor_lang::prelude::*;

use crate::crypto::field::{is_valid_fr, project_identifier_to_fr, u64_to_fr_be};
use crate::error::EngineError;

/// Selects which of the three per-statement verification keys applies;
/// also used as the PDA discriminant byte for `VerificationKeyAccount`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Statement {
    Withdraw = 0,
    UnshieldWithChange = 1,
    PrivateTransfer = 2,
}

impl Statement {
    pub fn tag(&self) -> [u8; 1] {
        [*self as u8]
    }
}

fn require_canonical(value: &[u8; 32]) -> Result<()> {
    require!(is_valid_fr(value), EngineError::PublicInputOutOfRange);
    Ok(())
}

/// S1 — `withdraw`. Public inputs in order: `root, N, recipient_f,
/// amount, fee`.
pub fn assemble_withdraw(
    root: [u8; 32],
    nullifier_hash: [u8; 32],
    recipient: &Pubkey,
    amount: u64,
    fee: u64,
) -> Result<Vec<[u8; 32]>> {
    require_canonical(&root)?;
    require_canonical(&nullifier_hash)?;

    Ok(vec![
        root,
        nullifier_hash,
        project_identifier_to_fr(&recipient.to_bytes()),
        u64_to_fr_be(amount),
        u64_to_fr_be(fee),
    ])
}

/// S2 — `unshield_with_change`. Public inputs in order: `root, N,
/// recipient_f, withdraw, fee, change_commitment`.
pub fn assemble_unshield_with_change(
    root: [u8; 32],
    nullifier_hash: [u8; 32],
    recipient: &Pubkey,
    withdraw_amount: u64,
    fee: u64,
    change_commitment: [u8; 32],
) -> Result<Vec<[u8; 32]>> {
    require_canonical(&root)?;
    require_canonical(&nullifier_hash)?;
    require_canonical(&change_commitment)?;

    Ok(vec![
        root,
        nullifier_hash,
        project_identifier_to_fr(&recipient.to_bytes()),
        u64_to_fr_be(withdraw_amount),
        u64_to_fr_be(fee),
        change_commitment,
    ])
}

/// S3 — `private_transfer`. Public inputs in order: `root, N1, N2,
/// C_out1, C_out2`. Inactive slots carry the all-zero encoding.
pub fn assemble_private_transfer(
    root: [u8; 32],
    input_nullifiers: [[u8; 32]; 2],
    output_commitments: [[u8; 32]; 2],
) -> Result<Vec<[u8; 32]>> {
    require_canonical(&root)?;
    for n in &input_nullifiers {
        require_canonical(n)?;
    }
    for c in &output_commitments {
        require_canonical(c)?;
    }

    require!(
        input_nullifiers.iter().any(|n| *n != [0u8; 32]),
        EngineError::NoActiveInput
    );

    Ok(vec![
        root,
        input_nullifiers[0],
        input_nullifiers[1],
        output_commitments[0],
        output_commitments[1],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    #[test]
    fn withdraw_vector_has_five_elements_in_order() {
        let v = assemble_withdraw([1u8; 32], [2u8; 32], &pk(), 1_000, 10).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], [1u8; 32]);
        assert_eq!(v[1], [2u8; 32]);
        assert_eq!(v[2][0], 0); // recipient_f high byte forced to zero
    }

    #[test]
    fn unshield_with_change_vector_has_six_elements() {
        let v = assemble_unshield_with_change([1u8; 32], [2u8; 32], &pk(), 100, 5, [3u8; 32])
            .unwrap();
        assert_eq!(v.len(), 6);
        assert_eq!(v[5], [3u8; 32]);
    }

    #[test]
    fn private_transfer_rejects_both_inputs_inactive() {
        let err = assemble_private_transfer([1u8; 32], [[0u8; 32], [0u8; 32]], [[0u8; 32]; 2]);
        assert!(err.is_err());
    }

    #[test]
    fn private_transfer_accepts_single_active_input() {
        let v = assemble_private_transfer([1u8; 32], [[9u8; 32], [0u8; 32]], [[0u8; 32]; 2])
            .unwrap();
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn rejects_non_canonical_root() {
        let over_modulus = crate::crypto::field::FR_MODULUS_BE;
        assert!(assemble_withdraw(over_modulus, [2u8; 32], &pk(), 1, 0).is_err());
    }

    #[test]
    fn statement_tag_is_stable() {
        assert_eq!(Statement::Withdraw.tag(), [0]);
        assert_eq!(Statement::UnshieldWithChange.tag(), [1]);
        assert_eq!(Statement::PrivateTransfer.tag(), [2]);
    }
}
