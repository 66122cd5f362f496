//! `private_transfer` — S3 (`private_transfer`), a 2-in-2-out
//! value-preserving shuffle entirely inside the pool. No Vault
//! movement: spends up to two nullifiers and mints up to two fresh
//! commitments, gated by a single Groth16 proof that the inputs and
//! outputs balance.
//!
//! A slot is active iff its amount is non-zero, and inactive slots
//! carry the all-zero nullifier/commitment and are skipped entirely
//! (no PDA created, no tree insertion). At least one input slot must
//! be active; the
//! circuit enforces that, this handler only assembles public inputs
//! and applies the resulting state changes.

use anchor_lang::prelude::*;

use crate::crypto::groth16;
use crate::crypto::public_inputs::assemble_private_transfer;
use crate::error::EngineError;
use crate::events::PrivateTransferred;
use crate::state::{MerkleTree, PoolState, RootsRing, SpentNullifier, VerificationKeyAccount};

#[derive(Accounts)]
#[instruction(
    proof_a: [u8; 64],
    proof_b: [u8; 128],
    proof_c: [u8; 64],
    input_nullifiers: [[u8; 32]; 2],
    output_commitments: [[u8; 32]; 2],
    root: [u8; 32],
)]
pub struct PrivateTransfer<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(mut, seeds = [b"merkle_tree"], bump)]
    pub merkle_tree: Account<'info, MerkleTree>,

    #[account(mut, seeds = [b"roots_history"], bump)]
    pub roots_ring: Account<'info, RootsRing>,

    #[account(
        seeds = [b"vk", &crate::crypto::public_inputs::Statement::PrivateTransfer.tag()],
        bump = verification_key.bump,
        constraint = verification_key.is_initialised @ EngineError::VerificationKeyNotSet,
    )]
    pub verification_key: Account<'info, VerificationKeyAccount>,

    #[account(mut)]
    pub submitter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, PrivateTransfer<'info>>,
    proof_a: [u8; 64],
    proof_b: [u8; 128],
    proof_c: [u8; 64],
    input_nullifiers: [[u8; 32]; 2],
    output_commitments: [[u8; 32]; 2],
    root: [u8; 32],
) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;
    pool_state.require_not_paused()?;

    require!(
        ctx.accounts.roots_ring.is_historical(&root),
        EngineError::StaleRoot
    );

    let active_outputs = output_commitments.iter().filter(|c| **c != [0u8; 32]).count();
    require!(
        pool_state.next_index + active_outputs as u64 <= pool_state.capacity(),
        EngineError::TreeFull
    );

    // Remaining accounts, in order: one `SpentNullifier` PDA per active
    // input slot (payer = submitter, seeds = [b"nullifier", N]),
    // pre-derived and passed by the caller. Anchor's declarative
    // `#[account(init, ...)]` cannot express a variable-length account
    // list keyed by a runtime-sized active-slot count, so this
    // instruction creates them manually via `SpentNullifier::check_unspent`
    // / `create`, the same helpers `unshield` and `unshield_with_change`
    // use for their single-nullifier case.
    let mut remaining = ctx.remaining_accounts.iter();
    let mut active_accounts = Vec::with_capacity(2);
    for n in input_nullifiers.iter() {
        if *n == [0u8; 32] {
            continue;
        }
        let nullifier_account = remaining.next().ok_or(error!(EngineError::MalformedInstruction))?;
        let bump = SpentNullifier::check_unspent(ctx.program_id, nullifier_account, *n)?;
        active_accounts.push((nullifier_account, *n, bump));
    }

    let public_inputs = assemble_private_transfer(root, input_nullifiers, output_commitments)?;
    groth16::verify(
        &proof_a,
        &proof_b,
        &proof_c,
        &public_inputs,
        &ctx.accounts.verification_key.as_verifying_key(),
    )
    .map_err(|_| error!(EngineError::InvalidProof))?;

    for (nullifier_account, n, bump) in active_accounts {
        SpentNullifier::create(
            ctx.program_id,
            nullifier_account,
            n,
            bump,
            &ctx.accounts.submitter.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            Clock::get()?.unix_timestamp,
            Clock::get()?.slot,
        )?;
    }

    let mut new_root = pool_state.root_current;
    for commitment in output_commitments.iter() {
        if *commitment == [0u8; 32] {
            continue;
        }
        let leaf_index = pool_state.next_index;
        new_root = ctx.accounts.merkle_tree.insert(leaf_index, *commitment)?;
        pool_state.next_index = pool_state
            .next_index
            .checked_add(1)
            .ok_or(error!(EngineError::TreeFull))?;
        pool_state.root_current = new_root;
        ctx.accounts.roots_ring.push(new_root);
    }

    emit!(PrivateTransferred {
        input_nullifiers,
        output_commitments,
        new_root,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("private_transfer: {} output(s) minted", active_outputs);

    Ok(())
}
