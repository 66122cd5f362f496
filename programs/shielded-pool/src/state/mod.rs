//! State account definitions for the shielded pool engine.
//!
//! ## Pool state (`PoolState`)
//! - PDA seeds: `["pool"]`
//! - Tree depth, cursor, current root, min shield, authority, pause flag
//!
//! ## Merkle tree (`MerkleTree`)
//! - PDA seeds: `["merkle_tree"]`
//! - Full level-order node array plus precomputed empty-subtree hashes
//!
//! ## Roots ring (`RootsRing`)
//! - PDA seeds: `["roots_history"]`
//! - Bounded window of historical roots
//!
//! ## Verification key (`VerificationKeyAccount`)
//! - PDA seeds: `["vk", statement_tag]`, one per statement (S1/S2/S3)
//!
//! ## Spent nullifier (`SpentNullifier`)
//! - PDA seeds: `["nullifier", nullifier_hash]`
//! - Existence of the account is the spent predicate

pub mod merkle_tree;
pub mod pool_state;
pub mod roots_ring;
pub mod spent_nullifier;
pub mod vault;
pub mod verification_key;

pub use merkle_tree::MerkleTree;
pub use pool_state::PoolState;
pub use roots_ring::RootsRing;
pub use spent_nullifier::SpentNullifier;
pub use vault::Vault;
pub use verification_key::VerificationKeyAccount;
