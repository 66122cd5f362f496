//! Cryptographic primitives for the shielded pool engine.
//!
//! - `field` — BN254 Fr/Fq moduli and the engine's byte conventions.
//! - `poseidon` — the single 2-to-1 hash used for commitments,
//!   nullifiers, and every internal Merkle node.
//! - `curve` — BN254 G1/G2 point helpers (identity, on-curve, negation).
//! - `groth16` — pairing-based proof verification via `alt_bn128`.
//! - `public_inputs` — per-statement public-input vector assembly.
//!
//! # Security model
//! All verification functions are fail-closed: invalid proofs, off-curve
//! points, and out-of-range field elements are always rejected. There is
//! no dev-mode bypass in this crate.

pub mod curve;
pub mod field;
pub mod groth16;
pub mod poseidon;
pub mod public_inputs;

pub use curve::{G1Point, G2Point};
pub use groth16::VerifyingKey;
pub use public_inputs::Statement;
