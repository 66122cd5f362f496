//! Error kinds for the shielded pool engine.
//!
//! One variant per distinct failure kind the engine can reject on.
//! Codes are stable across versions for client compatibility; never
//! reorder existing variants.

use anchor_lang::prelude::*;

#[error_code]
pub enum EngineError {
    #[msg("Pool has already been initialised")]
    AlreadyInitialised, // 6000

    #[msg("Pool has not been initialised")]
    NotInitialised, // 6001

    #[msg("Commitment tree is full")]
    TreeFull, // 6002

    #[msg("Claimed root is not within the historical roots ring")]
    StaleRoot, // 6003

    #[msg("Nullifier has already been spent")]
    DuplicateNullifier, // 6004

    #[msg("Groth16 proof failed verification")]
    InvalidProof, // 6005

    #[msg("Proof or verification key data has the wrong length")]
    InvalidProofFormat, // 6006

    #[msg("A public input value is not a canonical field element")]
    PublicInputOutOfRange, // 6007

    #[msg("A curve point is off-curve or malformed")]
    InvalidPoint, // 6008

    #[msg("A public u64 does not fit, or amount + fee overflows")]
    AmountOutOfRange, // 6009

    #[msg("Shield amount is below the configured minimum")]
    BelowMinimum, // 6010

    #[msg("Vault lacks the balance required for this transfer")]
    InsufficientVault, // 6011

    #[msg("Instruction payload is malformed")]
    MalformedInstruction, // 6012

    #[msg("Verification key for this statement has not been configured")]
    VerificationKeyNotSet, // 6013

    #[msg("Tree depth must be between 1 and 32")]
    InvalidTreeDepth, // 6014

    #[msg("Roots ring size must be at least 1")]
    InvalidRootsRingSize, // 6015

    #[msg("Pool is paused")]
    PoolPaused, // 6016

    #[msg("Caller is not the pool authority")]
    Unauthorized, // 6017

    #[msg("No authority transfer is pending")]
    NoPendingAuthority, // 6018

    #[msg("Private transfer must have at least one active input slot")]
    NoActiveInput, // 6019
}
