//! Poseidon-2 hash over the BN254 scalar field.
//!
//! Used for note commitments, nullifier hashes, and every internal
//! Merkle node — the same hash, on-chain, everywhere. The Phase 2
//! scaffold this replaces hashed tree nodes with Keccak256 "for
//! efficiency" and left Poseidon as off-chain-only documentation; that
//! split is unsound (the circuit binds commitments and tree nodes with
//! the same hash) and is not carried forward.

use anchor_lang::prelude::*;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use light_poseidon::{Poseidon, PoseidonHasher};

use crate::crypto::field::is_valid_fr;
use crate::error::EngineError;

fn bytes_to_fr(bytes: &[u8; 32]) -> Result<Fr> {
    require!(is_valid_fr(bytes), EngineError::PublicInputOutOfRange);
    Ok(Fr::from_be_bytes_mod_order(bytes))
}

fn fr_to_bytes(value: &Fr) -> [u8; 32] {
    let raw = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

/// `poseidon2(x, y) -> z`, the engine's single 2-to-1 compression
/// primitive, over circomlib-compatible width-3 round constants.
pub fn hash_two_to_one(left: &[u8; 32], right: &[u8; 32]) -> Result<[u8; 32]> {
    let left_fr = bytes_to_fr(left)?;
    let right_fr = bytes_to_fr(right)?;

    let mut hasher = Poseidon::<Fr>::new_circom(2).map_err(|_| EngineError::InvalidPoint)?;
    let result = hasher
        .hash(&[left_fr, right_fr])
        .map_err(|_| EngineError::InvalidPoint)?;

    Ok(fr_to_bytes(&result))
}

/// Note commitment: `C = H(secret, H(nullifier, amount))`.
pub fn commitment(secret: &[u8; 32], nullifier: &[u8; 32], amount: u64) -> Result<[u8; 32]> {
    let amount_fr = crate::crypto::field::u64_to_fr_be(amount);
    let inner = hash_two_to_one(nullifier, &amount_fr)?;
    hash_two_to_one(secret, &inner)
}

/// Nullifier hash: `N = H(nullifier, 0)`.
pub fn nullifier_hash(nullifier: &[u8; 32]) -> Result<[u8; 32]> {
    hash_two_to_one(nullifier, &[0u8; 32])
}
