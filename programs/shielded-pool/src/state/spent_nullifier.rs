//! Nullifier set, represented as one PDA per spent nullifier.
//!
//! Kept from the Phase 2 design, whose own doc comment already argues
//! for this over a growing vector: O(1) lookup via account existence,
//! O(1) insert, unlimited capacity, no reallocation hazard that could
//! abort an in-flight instruction. The representation is otherwise
//! unconstrained as long as it delivers exactly these properties, so
//! the pattern survives unchanged — only the
//! seed derivation drops the `pool` component, since this engine has a
//! single pool per deployment.
//!
//! Creation is split into `check_unspent` (PDA derivation + existence
//! check, surfacing `DuplicateNullifier` on replay) and `create` (the
//! actual account creation), rather than relying on Anchor's
//! declarative `#[account(init, ...)]`, whose failure on an
//! already-existing account surfaces a generic "account already in
//! use" error instead of the engine's own error kind. Every handler
//! that spends a nullifier goes through both calls in that order.

use anchor_lang::prelude::*;

use crate::error::EngineError;

/// PDA seeds: `[b"nullifier", nullifier_hash.as_ref()]`. Existence of
/// this account is the entire "spent" predicate.
#[account]
pub struct SpentNullifier {
    pub nullifier_hash: [u8; 32],
    pub spent_at: i64,
    pub spent_slot: u64,
    pub bump: u8,
}

impl SpentNullifier {
    pub const LEN: usize = 8 // discriminator
        + 32 // nullifier_hash
        + 8  // spent_at
        + 8  // spent_slot
        + 1; // bump

    pub const SEED_PREFIX: &'static [u8] = b"nullifier";

    /// Derives the PDA for `nullifier_hash` and verifies `nullifier_account`
    /// matches it. Fails with `DuplicateNullifier` if the PDA already holds
    /// data (the note has already been spent). Returns the bump seed for
    /// a subsequent `create` call.
    pub fn check_unspent(
        program_id: &Pubkey,
        nullifier_account: &AccountInfo,
        nullifier_hash: [u8; 32],
    ) -> Result<u8> {
        let (expected_pda, bump) = Pubkey::find_program_address(
            &[Self::SEED_PREFIX, nullifier_hash.as_ref()],
            program_id,
        );
        require_keys_eq!(
            nullifier_account.key(),
            expected_pda,
            EngineError::MalformedInstruction
        );
        require!(
            nullifier_account.lamports() == 0 && nullifier_account.data_is_empty(),
            EngineError::DuplicateNullifier
        );
        Ok(bump)
    }

    /// Creates the PDA checked by `check_unspent`, recording the spend.
    /// Must be called with the `bump` `check_unspent` returned for the
    /// same account and nullifier.
    #[allow(clippy::too_many_arguments)]
    pub fn create<'info>(
        program_id: &Pubkey,
        nullifier_account: &AccountInfo<'info>,
        nullifier_hash: [u8; 32],
        bump: u8,
        payer: &AccountInfo<'info>,
        system_program: &AccountInfo<'info>,
        spent_at: i64,
        spent_slot: u64,
    ) -> Result<()> {
        let rent = Rent::get()?.minimum_balance(Self::LEN);
        let seeds: &[&[u8]] = &[Self::SEED_PREFIX, nullifier_hash.as_ref(), &[bump]];
        anchor_lang::system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                anchor_lang::system_program::CreateAccount {
                    from: payer.clone(),
                    to: nullifier_account.clone(),
                },
                &[seeds],
            ),
            rent,
            Self::LEN as u64,
            program_id,
        )?;

        let mut data = nullifier_account.try_borrow_mut_data()?;
        data[..8].copy_from_slice(&Self::DISCRIMINATOR);
        let record = Self {
            nullifier_hash,
            spent_at,
            spent_slot,
            bump,
        };
        let mut cursor: &mut [u8] = &mut data[8..];
        record.serialize(&mut cursor)?;
        Ok(())
    }
}
