//! BN254 field constants and the engine's byte conventions.
//!
//! All Fr/Fq values that cross the instruction boundary are 32-byte
//! big-endian arrays, regardless of Anchor's native little-endian
//! numeric encoding for `u64` wire fields.

use num_bigint::BigUint;
use num_traits::Zero;

/// BN254 scalar field modulus `r` (order of G1/G2), big-endian.
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const FR_MODULUS_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// BN254 base field modulus `p` (coordinates of curve points), big-endian.
/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// True iff `bytes`, interpreted big-endian, is strictly less than the Fr modulus.
pub fn is_valid_fr(bytes: &[u8; 32]) -> bool {
    BigUint::from_bytes_be(bytes) < BigUint::from_bytes_be(&FR_MODULUS_BE)
}

/// True iff `bytes`, interpreted big-endian, is strictly less than the Fq modulus.
pub fn is_valid_fq(bytes: &[u8; 32]) -> bool {
    BigUint::from_bytes_be(bytes) < BigUint::from_bytes_be(&FQ_MODULUS_BE)
}

/// Negate a base-field element: `-y = p - y (mod p)`. `0` maps to `0`.
pub fn negate_fq(y: &[u8; 32]) -> [u8; 32] {
    let p = BigUint::from_bytes_be(&FQ_MODULUS_BE);
    let y_val = BigUint::from_bytes_be(y);
    let neg = if y_val.is_zero() { y_val } else { &p - &y_val };
    let raw = neg.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

/// Encode a `u64` amount as an Fr element (big-endian, zero-padded high bytes).
pub fn u64_to_fr_be(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Project a 32-byte host identifier (e.g. a public key) down into Fr by
/// forcing the high byte to zero, per the recipient-field binding rule.
pub fn project_identifier_to_fr(id: &[u8; 32]) -> [u8; 32] {
    let mut out = *id;
    out[0] = 0;
    out
}
