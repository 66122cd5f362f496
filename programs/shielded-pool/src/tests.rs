//! Cross-cutting tests for the shielded pool engine.
//!
//! Per-module unit tests (Poseidon, curve, groth16, public inputs,
//! merkle tree, roots ring, pool state) live alongside their code in
//! `#[cfg(test)]` blocks. This file aggregates the invariants that
//! span more than one module, plus property-based tests (`proptest`)
//! that generalise the fixed-case unit tests.
//!
//! No on-chain integration harness runs here: `alt_bn128_addition` /
//! `_multiplication` / `_pairing` are syscalls only reachable inside
//! the validator runtime, so a real Groth16 proof cannot be verified
//! from `cargo test`. The invariants below instead exercise the pure
//! Rust state machines (`MerkleTree`, `RootsRing`, `PoolState`) that
//! the instruction handlers drive, which is where those cross-module
//! properties actually live.

use proptest::prelude::*;

use crate::crypto::poseidon;
use crate::state::merkle_tree::MerkleTree;
use crate::state::pool_state::PoolState;
use crate::state::roots_ring::RootsRing;

fn fresh_tree(levels: u8) -> MerkleTree {
    let mut tree = MerkleTree {
        levels: 0,
        nodes: vec![],
        zeros: vec![],
    };
    tree.initialise(levels).unwrap();
    tree
}

fn fresh_ring(size: u16, genesis: [u8; 32]) -> RootsRing {
    let mut ring = RootsRing {
        size: 0,
        cursor: 0,
        roots: vec![],
    };
    ring.initialise(size, genesis).unwrap();
    ring
}

fn fresh_pool(levels: u8, min_shield: u64) -> PoolState {
    let mut pool = PoolState {
        authority: anchor_lang::prelude::Pubkey::default(),
        pending_authority: None,
        levels: 0,
        next_index: 0,
        root_current: [0u8; 32],
        min_shield: 0,
        total_shielded: 0,
        total_unshielded: 0,
        is_paused: false,
        bump: 0,
    };
    pool.initialise(
        anchor_lang::prelude::Pubkey::default(),
        levels,
        [0u8; 32],
        min_shield,
        0,
    );
    pool
}

/// Independent reference root: materialises all `2^levels` leaf slots
/// (defaulting untouched ones to `zeros[0]`) and folds them pairwise up
/// to the root, level by level. Deliberately does not call
/// `MerkleTree::insert` — this is the "freshly built full tree" side of
/// the invariant, not a second run of the incremental algorithm.
fn naive_root(levels: u8, leaves: &[[u8; 32]]) -> [u8; 32] {
    let capacity = 1usize << levels;
    let mut level: Vec<[u8; 32]> = (0..capacity)
        .map(|i| leaves.get(i).copied().unwrap_or([0u8; 32]))
        .collect();

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| poseidon::hash_two_to_one(&pair[0], &pair[1]).unwrap())
            .collect();
    }
    level[0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_poseidon_deterministic(left in any::<[u8; 31]>(), right in any::<[u8; 31]>()) {
        // 31 bytes, zero-padded high byte, guarantees a canonical Fr element.
        let mut l = [0u8; 32];
        l[1..].copy_from_slice(&left);
        let mut r = [0u8; 32];
        r[1..].copy_from_slice(&right);

        let h1 = poseidon::hash_two_to_one(&l, &r).unwrap();
        let h2 = poseidon::hash_two_to_one(&l, &r).unwrap();
        prop_assert_eq!(h1, h2);
    }

    #[test]
    fn prop_poseidon_not_commutative_when_inputs_differ(
        left in any::<[u8; 31]>(),
        right in any::<[u8; 31]>(),
    ) {
        prop_assume!(left != right);
        let mut l = [0u8; 32];
        l[1..].copy_from_slice(&left);
        let mut r = [0u8; 32];
        r[1..].copy_from_slice(&right);

        prop_assert_ne!(
            poseidon::hash_two_to_one(&l, &r).unwrap(),
            poseidon::hash_two_to_one(&r, &l).unwrap()
        );
    }

    #[test]
    fn prop_incremental_root_matches_freshly_built_tree(
        levels in 2u8..6u8,
        leaf_bytes in prop::collection::vec(any::<[u8; 31]>(), 1..12),
    ) {
        let leaves: Vec<[u8; 32]> = leaf_bytes
            .into_iter()
            .map(|b| {
                let mut leaf = [0u8; 32];
                leaf[1..].copy_from_slice(&b);
                leaf
            })
            .take((1u64 << levels) as usize)
            .collect();
        prop_assume!(!leaves.is_empty());

        let mut incremental = fresh_tree(levels);
        let mut root = incremental.root();
        for (i, leaf) in leaves.iter().enumerate() {
            root = incremental.insert(i as u64, *leaf).unwrap();
        }

        prop_assert_eq!(root, naive_root(levels, &leaves));
    }

    #[test]
    fn prop_root_survives_exactly_r_minus_one_further_pushes(
        size in 2u16..16u16,
        filler_bytes in prop::collection::vec(any::<[u8; 31]>(), 0..31),
    ) {
        let genesis = {
            let mut g = [0u8; 32];
            g[0] = 0xFF;
            g
        };
        let fillers: Vec<[u8; 32]> = filler_bytes
            .into_iter()
            .map(|b| {
                let mut root = [0u8; 32];
                root[1..].copy_from_slice(&b);
                root
            })
            .collect();

        // Surviving window: pushing up to `size - 1` further roots must
        // never evict the genesis root's slot.
        let mut ring = fresh_ring(size, genesis);
        let survives = fillers.iter().take(size as usize - 1);
        for root in survives {
            ring.push(*root);
            prop_assert!(ring.is_historical(&genesis));
        }

        // Eviction: exactly one more push (the `size`-th total) always
        // overwrites the genesis root's slot.
        if fillers.len() >= size as usize {
            let mut ring = fresh_ring(size, genesis);
            for root in fillers.iter().take(size as usize) {
                ring.push(*root);
            }
            prop_assert!(!ring.is_historical(&genesis));
        }
    }
}

/// Shield then unshield of the same note conserves value; a second
/// unshield of the same nullifier is a
/// duplicate (checked at the nullifier-PDA layer, out of reach of a
/// plain unit test — see module doc).
#[test]
fn scenario_shield_then_unshield_conserves_value() {
    let mut pool = fresh_pool(7, 1_000_000);
    let mut tree = fresh_tree(7);

    let commitment = {
        let mut c = [0u8; 32];
        c[1] = 0xAB;
        c
    };
    let amount = 10_000_000u64;

    let leaf_index = pool.next_index;
    let new_root = tree.insert(leaf_index, commitment).unwrap();
    pool.next_index += 1;
    pool.root_current = new_root;
    pool.record_shield(amount).unwrap();

    assert_eq!(pool.next_index, 1);
    assert_eq!(pool.total_shielded, amount);

    let fee = 0u64;
    pool.record_unshield(amount + fee).unwrap();

    assert_eq!(pool.total_shielded - pool.total_unshielded, 0);
}

/// Shield then unshield-with-change leaves the vault holding exactly
/// the change amount and mints a second leaf.
#[test]
fn scenario_unshield_with_change_leaves_correct_remainder() {
    let mut pool = fresh_pool(7, 1_000_000);
    let mut tree = fresh_tree(7);

    let commitment = [0x11u8; 32];
    let shield_amount = 25_000_000u64;
    let leaf0 = pool.next_index;
    pool.root_current = tree.insert(leaf0, commitment).unwrap();
    pool.next_index += 1;
    pool.record_shield(shield_amount).unwrap();

    let withdraw = 10_000_000u64;
    let fee = 0u64;
    let change_amount = shield_amount - withdraw - fee;
    assert_eq!(change_amount, 15_000_000);

    let change_commitment = [0x22u8; 32];
    let leaf1 = pool.next_index;
    pool.root_current = tree.insert(leaf1, change_commitment).unwrap();
    pool.next_index += 1;
    pool.record_unshield(withdraw + fee).unwrap();

    assert_eq!(pool.next_index, 2);
    assert_eq!(pool.total_shielded - pool.total_unshielded, change_amount);
}

/// private_transfer merging two notes into one output plus one
/// inactive output moves no Vault value and mints
/// exactly one new leaf.
#[test]
fn scenario_private_transfer_merge_has_no_vault_effect() {
    let mut pool = fresh_pool(7, 1_000_000);
    let mut tree = fresh_tree(7);

    for (i, c) in [[0x01u8; 32], [0x02u8; 32]].iter().enumerate() {
        pool.root_current = tree.insert(i as u64, *c).unwrap();
        pool.next_index += 1;
        pool.record_shield(if i == 0 { 3_000_000_000 } else { 2_000_000_000 })
            .unwrap();
    }
    let before_total = pool.total_shielded - pool.total_unshielded;

    let merged_output = [0x03u8; 32];
    let leaf_index = pool.next_index;
    pool.root_current = tree.insert(leaf_index, merged_output).unwrap();
    pool.next_index += 1;
    // private_transfer never touches total_shielded/total_unshielded:
    // it is a reshuffle of already-shielded value, not a Vault movement.

    assert_eq!(pool.next_index, 3);
    assert_eq!(pool.total_shielded - pool.total_unshielded, before_total);
}

/// Shield fills the tree exactly at capacity, and the next shield
/// must fail with `TreeFull`.
#[test]
fn scenario_tree_fills_exactly_then_rejects() {
    let levels = 2; // capacity 4
    let mut pool = fresh_pool(levels, 0);
    let mut tree = fresh_tree(levels);

    for i in 0..4u64 {
        let leaf = {
            let mut l = [0u8; 32];
            l[31] = i as u8 + 1;
            l
        };
        assert!(!pool.is_full());
        pool.root_current = tree.insert(pool.next_index, leaf).unwrap();
        pool.next_index += 1;
    }

    assert!(pool.is_full());
    assert!(tree.insert(pool.next_index, [0xFFu8; 32]).is_err());
}

/// `amount + fee` overflowing `u64` must be rejected before any state
/// mutation (mirrors the `checked_add` guard
/// in `unshield`'s handler).
#[test]
fn scenario_amount_plus_fee_overflow_is_rejected() {
    let amount = u64::MAX;
    let fee = 1u64;
    assert!(amount.checked_add(fee).is_none());
}

/// Zero-amount shield is rejected below any positive minimum.
#[test]
fn scenario_zero_amount_shield_is_below_minimum() {
    let min_shield = 1_000_000u64;
    let amount = 0u64;
    assert!(amount < min_shield);
}

/// The recipient-field projection zeroes the high byte regardless of
/// what the original identifier's high byte was.
#[test]
fn scenario_recipient_projection_is_stable_for_nonzero_high_byte() {
    let id = [0xFFu8; 32];
    let projected = crate::crypto::field::project_identifier_to_fr(&id);
    assert_eq!(projected[0], 0);
    assert_eq!(&projected[1..], &[0xFFu8; 31][..]);

    // A prover using the same rule reproduces the identical projection.
    let reprojected = crate::crypto::field::project_identifier_to_fr(&projected);
    assert_eq!(projected, reprojected);
}

#[test]
fn pool_state_two_step_authority_transfer() {
    let mut pool = fresh_pool(4, 0);
    let current = pool.authority;
    let candidate = anchor_lang::prelude::Pubkey::new_from_array([7u8; 32]);

    pool.propose_authority(candidate);
    assert_eq!(pool.pending_authority, Some(candidate));

    // Wrong caller cannot accept.
    assert!(pool.accept_authority(anchor_lang::prelude::Pubkey::new_from_array([9u8; 32])).is_err());
    assert_eq!(pool.authority, current);

    let previous = pool.accept_authority(candidate).unwrap();
    assert_eq!(previous, current);
    assert_eq!(pool.authority, candidate);
    assert_eq!(pool.pending_authority, None);
}

#[test]
fn pool_state_cancel_authority_transfer_requires_pending() {
    let mut pool = fresh_pool(4, 0);
    assert!(pool.cancel_authority().is_err());

    pool.propose_authority(anchor_lang::prelude::Pubkey::new_from_array([1u8; 32]));
    assert!(pool.cancel_authority().is_ok());
    assert_eq!(pool.pending_authority, None);
}
