//! Non-custodial shielded SOL pool.
//!
//! Four owned state components — the Poseidon commitment accumulator,
//! the bounded roots ring, the nullifier set, and the Groth16 verifier
//! — tied together by an instruction dispatcher that enforces native
//! SOL value conservation across `shield`, `unshield`,
//! `unshield_with_change`, and `private_transfer`.

use anchor_lang::prelude::*;

pub mod crypto;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use crypto::public_inputs::Statement;
use instructions::*;

declare_id!("Ddokrq1M6hT9Vu63k4JWqVRSecyLeotNf8xKknKfRwvZ");

#[program]
pub mod shielded_pool {
    use super::*;

    /// One-shot: allocates `PoolState`, `MerkleTree`, `RootsRing`, the
    /// native SOL `Vault`, and the three per-statement VK slots.
    pub fn initialise(
        ctx: Context<Initialise>,
        levels: u8,
        roots_ring_size: u16,
        min_shield: u64,
    ) -> Result<()> {
        instructions::initialise::handler(ctx, levels, roots_ring_size, min_shield)
    }

    /// Configures one of the three per-statement Groth16 verification
    /// keys. Authority-gated; callable any time after `initialise`.
    pub fn set_verification_key(
        ctx: Context<SetVerificationKey>,
        statement: Statement,
        alpha_g1: [u8; 64],
        beta_g2: [u8; 128],
        gamma_g2: [u8; 128],
        delta_g2: [u8; 128],
        ic: Vec<[u8; 64]>,
    ) -> Result<()> {
        instructions::set_verification_key::handler(
            ctx, statement, alpha_g1, beta_g2, gamma_g2, delta_g2, ic,
        )
    }

    /// Deposits native SOL under `commitment`. No proof, no nullifier.
    pub fn shield(ctx: Context<Shield>, commitment: [u8; 32], amount: u64) -> Result<()> {
        instructions::shield::handler(ctx, commitment, amount)
    }

    /// S1 (`withdraw`): spends one note entirely, paying `amount` to
    /// `recipient` and `fee` to the submitting relayer.
    #[allow(clippy::too_many_arguments)]
    pub fn unshield(
        ctx: Context<Unshield>,
        proof_a: [u8; 64],
        proof_b: [u8; 128],
        proof_c: [u8; 64],
        nullifier_hash: [u8; 32],
        amount: u64,
        fee: u64,
        root: [u8; 32],
    ) -> Result<()> {
        instructions::unshield::handler(
            ctx,
            proof_a,
            proof_b,
            proof_c,
            nullifier_hash,
            amount,
            fee,
            root,
        )
    }

    /// S2 (`unshield_with_change`): spends one note, pays out
    /// `withdraw_amount` + `fee`, and re-mints any leftover value as a
    /// fresh change commitment.
    #[allow(clippy::too_many_arguments)]
    pub fn unshield_with_change(
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
        instructions::unshield_with_change::handler(
            ctx,
            proof_a,
            proof_b,
            proof_c,
            nullifier_hash,
            withdraw_amount,
            fee,
            change_commitment,
            root,
        )
    }

    /// S3 (`private_transfer`): 2-in-2-out value-preserving shuffle
    /// entirely inside the pool, no Vault movement.
    #[allow(clippy::too_many_arguments)]
    pub fn private_transfer<'info>(
        ctx: Context<'_, '_, '_, 'info, PrivateTransfer<'info>>,
        proof_a: [u8; 64],
        proof_b: [u8; 128],
        proof_c: [u8; 64],
        input_nullifiers: [[u8; 32]; 2],
        output_commitments: [[u8; 32]; 2],
        root: [u8; 32],
    ) -> Result<()> {
        instructions::private_transfer::handler(
            ctx,
            proof_a,
            proof_b,
            proof_c,
            input_nullifiers,
            output_commitments,
            root,
        )
    }

    pub fn pause_pool(ctx: Context<PausePool>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    pub fn unpause_pool(ctx: Context<UnpausePool>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    pub fn propose_authority_transfer(
        ctx: Context<ProposeAuthorityTransfer>,
        candidate: Pubkey,
    ) -> Result<()> {
        instructions::admin::update_authority::propose_handler(ctx, candidate)
    }

    pub fn accept_authority_transfer(ctx: Context<AcceptAuthorityTransfer>) -> Result<()> {
        instructions::admin::update_authority::accept_handler(ctx)
    }

    pub fn cancel_authority_transfer(ctx: Context<CancelAuthorityTransfer>) -> Result<()> {
        instructions::admin::update_authority::cancel_handler(ctx)
    }
}
