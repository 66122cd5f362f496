//! `unshield_with_change` — S2 (`unshield_with_change`). Spends one
//! note's nullifier, pays `withdraw` to `recipient` and `fee` to the
//! submitting relayer, and re-mints any leftover value as a fresh
//! change commitment in the same tree the withdrawn note came from.

use anchor_lang::prelude::*;

use crate::crypto::groth16;
use crate::crypto::public_inputs::assemble_unshield_with_change;
use crate::error::EngineError;
use crate::events::UnshieldedWithChange;
use crate::state::{MerkleTree, PoolState, RootsRing, SpentNullifier, Vault, VerificationKeyAccount};

#[derive(Accounts)]
pub struct UnshieldWithChange<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(mut, seeds = [b"merkle_tree"], bump)]
    pub merkle_tree: Account<'info, MerkleTree>,

    #[account(mut, seeds = [b"roots_history"], bump)]
    pub roots_ring: Account<'info, RootsRing>,

    #[account(
        seeds = [b"vk", &crate::crypto::public_inputs::Statement::UnshieldWithChange.tag()],
        bump = verification_key.bump,
        constraint = verification_key.is_initialised @ EngineError::VerificationKeyNotSet,
    )]
    pub verification_key: Account<'info, VerificationKeyAccount>,

    /// CHECK: PDA derivation and spent-state checked explicitly in the
    /// handler via `SpentNullifier::check_unspent`/`create`, so a
    /// replayed nullifier surfaces `EngineError::DuplicateNullifier`
    /// instead of Anchor's generic "account already in use".
    #[account(mut)]
    pub spent_nullifier: UncheckedAccount<'info>,

    #[account(mut, seeds = [b"vault"], bump)]
    pub vault: Account<'info, Vault>,

    /// CHECK: plain lamport recipient, identity bound into the proof via
    /// `recipient_f`.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub relayer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<UnshieldWithChange>,
    proof_a: [u8; 64],
    proof_b: [u8; 128],
    proof_c: [u8; 64],
    nullifier_hash: [u8; 32],
    withdraw_amount: u64,
    fee: u64,
    change_commitment: [u8; 32],
    root: [u8; 32],
) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;
    pool_state.require_not_paused()?;

    let nullifier_bump = SpentNullifier::check_unspent(
        ctx.program_id,
        &ctx.accounts.spent_nullifier.to_account_info(),
        nullifier_hash,
    )?;

    require!(
        ctx.accounts.roots_ring.is_historical(&root),
        EngineError::StaleRoot
    );

    let has_change = change_commitment != [0u8; 32];
    if has_change {
        require!(!pool_state.is_full(), EngineError::TreeFull);
    }

    let total = withdraw_amount
        .checked_add(fee)
        .ok_or(error!(EngineError::AmountOutOfRange))?;
    require!(
        ctx.accounts.vault.to_account_info().lamports() >= total,
        EngineError::InsufficientVault
    );

    let public_inputs = assemble_unshield_with_change(
        root,
        nullifier_hash,
        &ctx.accounts.recipient.key(),
        withdraw_amount,
        fee,
        change_commitment,
    )?;
    groth16::verify(
        &proof_a,
        &proof_b,
        &proof_c,
        &public_inputs,
        &ctx.accounts.verification_key.as_verifying_key(),
    )
    .map_err(|_| error!(EngineError::InvalidProof))?;

    SpentNullifier::create(
        ctx.program_id,
        &ctx.accounts.spent_nullifier.to_account_info(),
        nullifier_hash,
        nullifier_bump,
        &ctx.accounts.relayer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        Clock::get()?.unix_timestamp,
        Clock::get()?.slot,
    )?;

    if withdraw_amount > 0 {
        **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= withdraw_amount;
        **ctx.accounts.recipient.to_account_info().try_borrow_mut_lamports()? += withdraw_amount;
    }
    if fee > 0 {
        **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= fee;
        **ctx.accounts.relayer.to_account_info().try_borrow_mut_lamports()? += fee;
    }
    pool_state.record_unshield(total)?;

    let mut change_leaf_index = None;
    let mut new_root = pool_state.root_current;
    if has_change {
        let leaf_index = pool_state.next_index;
        new_root = ctx.accounts.merkle_tree.insert(leaf_index, change_commitment)?;
        pool_state.next_index = pool_state
            .next_index
            .checked_add(1)
            .ok_or(error!(EngineError::TreeFull))?;
        pool_state.root_current = new_root;
        ctx.accounts.roots_ring.push(new_root);
        change_leaf_index = Some(leaf_index);
    }

    emit!(UnshieldedWithChange {
        nullifier_hash,
        recipient: ctx.accounts.recipient.key(),
        withdraw_amount,
        fee,
        change_commitment,
        change_leaf_index,
        new_root,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "unshield_with_change: nullifier recorded, withdraw={} fee={} change_minted={}",
        withdraw_amount,
        fee,
        has_change
    );

    Ok(())
}
