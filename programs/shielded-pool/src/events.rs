//! Events emitted by the shielded pool engine.
//!
//! These are the off-ledger indexer's only way to reconstruct tree
//! state (leaf index, commitment, new root) without replaying every
//! account's history directly — the external prover/wallet depends on
//! them to build merkle paths, so they are part of the ambient
//! contract even though no instruction return value carries them.

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialised {
    pub authority: Pubkey,
    pub levels: u8,
    pub roots_ring_size: u16,
    pub min_shield: u64,
    pub timestamp: i64,
}

#[event]
pub struct VerificationKeySet {
    pub authority: Pubkey,
    pub statement: u8,
    pub ic_len: u8,
    pub timestamp: i64,
}

#[event]
pub struct Shielded {
    pub commitment: [u8; 32],
    pub leaf_index: u64,
    pub new_root: [u8; 32],
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Unshielded {
    pub nullifier_hash: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnshieldedWithChange {
    pub nullifier_hash: [u8; 32],
    pub recipient: Pubkey,
    pub withdraw_amount: u64,
    pub fee: u64,
    pub change_commitment: [u8; 32],
    pub change_leaf_index: Option<u64>,
    pub new_root: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct PrivateTransferred {
    pub input_nullifiers: [[u8; 32]; 2],
    pub output_commitments: [[u8; 32]; 2],
    pub new_root: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct PoolPaused {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolUnpaused {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityTransferred {
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
