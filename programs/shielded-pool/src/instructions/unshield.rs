//! `unshield` — S1 (`withdraw`). Spends one note's nullifier and
//! pays `amount` to `recipient`, `fee` to the submitting relayer, gated
//! by a Groth16 proof against a historical root.

use anchor_lang::prelude::*;

use crate::crypto::groth16;
use crate::crypto::public_inputs::assemble_withdraw;
use crate::error::EngineError;
use crate::events::Unshielded;
use crate::state::{PoolState, RootsRing, SpentNullifier, Vault, VerificationKeyAccount};

#[derive(Accounts)]
pub struct Unshield<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(seeds = [b"roots_history"], bump)]
    pub roots_ring: Account<'info, RootsRing>,

    #[account(
        seeds = [b"vk", &crate::crypto::public_inputs::Statement::Withdraw.tag()],
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
    ctx: Context<Unshield>,
    proof_a: [u8; 64],
    proof_b: [u8; 128],
    proof_c: [u8; 64],
    nullifier_hash: [u8; 32],
    amount: u64,
    fee: u64,
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

    let total = amount
        .checked_add(fee)
        .ok_or(error!(EngineError::AmountOutOfRange))?;
    require!(
        ctx.accounts.vault.to_account_info().lamports() >= total,
        EngineError::InsufficientVault
    );

    let public_inputs = assemble_withdraw(
        root,
        nullifier_hash,
        &ctx.accounts.recipient.key(),
        amount,
        fee,
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

    if amount > 0 {
        **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= amount;
        **ctx.accounts.recipient.to_account_info().try_borrow_mut_lamports()? += amount;
    }
    if fee > 0 {
        **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= fee;
        **ctx.accounts.relayer.to_account_info().try_borrow_mut_lamports()? += fee;
    }

    pool_state.record_unshield(total)?;

    emit!(Unshielded {
        nullifier_hash,
        recipient: ctx.accounts.recipient.key(),
        amount,
        fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("unshield: nullifier recorded, amount={} fee={}", amount, fee);

    Ok(())
}
