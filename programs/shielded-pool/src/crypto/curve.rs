//! BN254 curve point helpers used at the Groth16 verification boundary.
//!
//! Supersedes the Phase 2 placeholder module: the on-curve check the
//! earlier scaffold deferred to "Phase 3" (see its TODOs) is implemented
//! here with `num-bigint` Fq arithmetic, the same approach the
//! `zorb-labs` reference repo in the pack uses for its own curve helpers.

use anchor_lang::prelude::*;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::crypto::field::{is_valid_fq, FQ_MODULUS_BE};
use crate::error::EngineError;

/// G1 point, uncompressed: 64 bytes, `x (32, BE) || y (32, BE)`.
pub type G1Point = [u8; 64];

/// G2 point, uncompressed, coefficient-swapped: 128 bytes,
/// `x1 (32, BE) || x0 (32, BE) || y1 (32, BE) || y0 (32, BE)`.
pub type G2Point = [u8; 128];

/// `true` iff `point` is the all-zero encoding (point at infinity convention
/// used by the host's `alt_bn128` precompile input format).
pub fn is_g1_identity(point: &G1Point) -> bool {
    point.iter().all(|&b| b == 0)
}

/// Checks `y^2 = x^3 + 3 (mod p)`, the BN254 short Weierstrass equation.
/// The identity encoding is accepted without a curve check.
pub fn validate_g1_on_curve(point: &G1Point) -> Result<()> {
    if is_g1_identity(point) {
        return Ok(());
    }

    let x_bytes: [u8; 32] = point[..32].try_into().unwrap();
    let y_bytes: [u8; 32] = point[32..].try_into().unwrap();
    require!(
        is_valid_fq(&x_bytes) && is_valid_fq(&y_bytes),
        EngineError::InvalidPoint
    );

    let p = BigUint::from_bytes_be(&FQ_MODULUS_BE);
    let x = BigUint::from_bytes_be(&x_bytes);
    let y = BigUint::from_bytes_be(&y_bytes);
    let lhs = (&y * &y) % &p;
    let x_cubed = (&x * &x * &x) % &p;
    let rhs = (x_cubed + BigUint::from(3u32)) % &p;
    require!(lhs == rhs, EngineError::InvalidPoint);

    Ok(())
}

/// Structural check only: every Fq limb of a G2 point must be canonical.
/// Full on-curve validation over Fp2 is left to the `alt_bn128_pairing`
/// syscall, which rejects malformed or off-curve G2 elements itself.
pub fn validate_g2_limbs(point: &G2Point) -> Result<()> {
    for chunk in point.chunks_exact(32) {
        let limb: [u8; 32] = chunk.try_into().unwrap();
        require!(is_valid_fq(&limb), EngineError::InvalidPoint);
    }
    Ok(())
}

pub fn is_g2_identity(point: &G2Point) -> bool {
    point.iter().all(|&b| b == 0)
}

/// `-y = p - y (mod p)`; used by tests pinning the wire convention that
/// callers must pre-negate `proof_a`'s y-coordinate before submission.
pub fn negate_g1(point: &G1Point) -> G1Point {
    if is_g1_identity(point) {
        return *point;
    }
    let p = BigUint::from_bytes_be(&FQ_MODULUS_BE);
    let y = BigUint::from_bytes_be(&point[32..]);
    let neg_y = if y.is_zero() { y } else { &p - &y };
    let raw = neg_y.to_bytes_be();
    let mut out = *point;
    out[32..].fill(0);
    out[64 - raw.len()..].copy_from_slice(&raw);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_recognised() {
        assert!(is_g1_identity(&[0u8; 64]));
        assert!(!is_g1_identity(&[1u8; 64]));
        assert!(is_g2_identity(&[0u8; 128]));
    }

    #[test]
    fn identity_passes_on_curve_check() {
        assert!(validate_g1_on_curve(&[0u8; 64]).is_ok());
    }

    #[test]
    fn generator_is_on_curve() {
        // BN254 G1 generator: x = 1, y = 2.
        let mut g = [0u8; 64];
        g[31] = 1;
        g[63] = 2;
        assert!(validate_g1_on_curve(&g).is_ok());
    }

    #[test]
    fn off_curve_point_is_rejected() {
        let mut bad = [0u8; 64];
        bad[31] = 1;
        bad[63] = 3; // y = 3, not on curve for x = 1
        assert!(validate_g1_on_curve(&bad).is_err());
    }

    #[test]
    fn negate_g1_double_negation_identity() {
        let mut g = [0u8; 64];
        g[31] = 1;
        g[63] = 2;
        let neg = negate_g1(&g);
        assert_ne!(neg, g);
        assert_eq!(negate_g1(&neg), g);
    }

    #[test]
    fn negate_g1_identity_is_identity() {
        assert_eq!(negate_g1(&[0u8; 64]), [0u8; 64]);
    }
}
