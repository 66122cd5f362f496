//! Groth16 proof verification over BN254, via the host's `alt_bn128`
//! precompile syscalls.
//!
//! Replaces the Phase 2 `groth16_verifier` module, which was an explicit
//! fail-closed stub ("ALWAYS RETURNS ERROR... until Phase 3"). This is
//! that Phase 3: a real pairing check, no bypass, no dev-mode.
//!
//! Convention (load-bearing, see the design notes on encoding
//! discipline): `proof_a` arrives with its y-coordinate already negated
//! by the prover, and `proof_b`'s G2 limbs are coefficient-swapped
//! (`x1‖x0‖y1‖y0`). The engine does not renegotiate either convention;
//! it feeds the bytes straight into the pairing check.

use anchor_lang::prelude::*;
use solana_program::alt_bn128::prelude::{alt_bn128_addition, alt_bn128_multiplication, alt_bn128_pairing};

use crate::crypto::curve::{validate_g1_on_curve, validate_g2_limbs, G1Point, G2Point};
use crate::crypto::field::is_valid_fr;
use crate::error::EngineError;

/// A statement's verification key: `alpha ∈ G1`, `beta, gamma, delta ∈
/// G2`, and `k+1` IC points `ic₀…ic_k ∈ G1` (`ic₀` plus one per public
/// input).
pub struct VerifyingKey<'a> {
    pub alpha_g1: &'a G1Point,
    pub beta_g2: &'a G2Point,
    pub gamma_g2: &'a G2Point,
    pub delta_g2: &'a G2Point,
    pub ic: &'a [G1Point],
}

fn g1_concat(a: &G1Point, b: &G1Point) -> [u8; 128] {
    let mut out = [0u8; 128];
    out[..64].copy_from_slice(a);
    out[64..].copy_from_slice(b);
    out
}

/// `vk_x = ic₀ + Σ pᵢ·icᵢ`, the linear combination of IC points that
/// binds the public inputs into the pairing check.
fn prepare_public_inputs(vk: &VerifyingKey, public_inputs: &[[u8; 32]]) -> Result<G1Point> {
    require!(
        public_inputs.len() + 1 == vk.ic.len(),
        EngineError::InvalidProofFormat
    );

    let mut acc = vk.ic[0];
    for (i, input) in public_inputs.iter().enumerate() {
        require!(is_valid_fr(input), EngineError::PublicInputOutOfRange);

        let mut mul_input = [0u8; 96];
        mul_input[..64].copy_from_slice(&vk.ic[i + 1]);
        mul_input[64..].copy_from_slice(input);
        let term: [u8; 64] = alt_bn128_multiplication(&mul_input)
            .map_err(|_| EngineError::InvalidPoint)?
            .try_into()
            .map_err(|_| EngineError::InvalidPoint)?;

        acc = alt_bn128_addition(&g1_concat(&acc, &term))
            .map_err(|_| EngineError::InvalidPoint)?
            .try_into()
            .map_err(|_| EngineError::InvalidPoint)?;
    }

    Ok(acc)
}

/// Verifies `e(A, B) · e(alpha, beta) · e(vk_x, gamma) · e(C, delta) =
/// 1` (the single-product form of `e(A,B) = e(alpha,beta)·e(vk_x,gamma)
/// ·e(C,delta)`, relying on the caller having already negated `A`).
pub fn verify(
    proof_a: &G1Point,
    proof_b: &G2Point,
    proof_c: &G1Point,
    public_inputs: &[[u8; 32]],
    vk: &VerifyingKey,
) -> Result<()> {
    validate_g1_on_curve(proof_a)?;
    validate_g1_on_curve(proof_c)?;
    validate_g2_limbs(proof_b)?;
    validate_g1_on_curve(vk.alpha_g1)?;

    let vk_x = prepare_public_inputs(vk, public_inputs)?;

    let mut pairing_input = Vec::with_capacity(6 * 192);
    pairing_input.extend_from_slice(proof_a);
    pairing_input.extend_from_slice(proof_b);
    pairing_input.extend_from_slice(&vk_x);
    pairing_input.extend_from_slice(vk.gamma_g2);
    pairing_input.extend_from_slice(proof_c);
    pairing_input.extend_from_slice(vk.delta_g2);
    pairing_input.extend_from_slice(vk.alpha_g1);
    pairing_input.extend_from_slice(vk.beta_g2);

    let result = alt_bn128_pairing(&pairing_input).map_err(|_| EngineError::InvalidProof)?;
    require!(result.last() == Some(&1u8), EngineError::InvalidProof);

    Ok(())
}
