//! Pool configuration and cursor state.
//!
//! Supersedes the Phase 2 `PoolConfig`: drops the SPL `token_mint`/
//! `vault` cached-address fields (the pool custodies native SOL, not an
//! SPL token, so there is no mint and the vault is a plain system
//! account derived deterministically from a fixed seed) and adds the
//! two-step authority transfer and running shielded/unshielded
//! counters used to cross-check the value-conservation invariant.

use anchor_lang::prelude::*;

use crate::error::EngineError;

/// PDA seeds: `[b"pool"]`. One pool per program deployment.
#[account]
pub struct PoolState {
    /// Current pool authority (admin): can pause, set VKs, transfer authority.
    pub authority: Pubkey,

    /// Authority proposed via `update_authority`, pending its own acceptance.
    pub pending_authority: Option<Pubkey>,

    /// Merkle tree depth (immutable after `initialise`).
    pub levels: u8,

    /// Next free leaf index; also total commitments ever inserted.
    pub next_index: u64,

    /// Current Merkle root, Fr encoded big-endian.
    pub root_current: [u8; 32],

    /// Minimum `shield` amount, in base units.
    pub min_shield: u64,

    /// Running total of shielded amounts (test/audit cross-check only;
    /// the Vault's lamport balance is the authoritative figure).
    pub total_shielded: u64,

    /// Running total of unshielded amounts (same caveat as above).
    pub total_unshielded: u64,

    pub is_paused: bool,

    pub bump: u8,
}

impl PoolState {
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 1 + 32 // pending_authority (Option<Pubkey>)
        + 1 // levels
        + 8 // next_index
        + 32 // root_current
        + 8 // min_shield
        + 8 // total_shielded
        + 8 // total_unshielded
        + 1 // is_paused
        + 1; // bump

    #[allow(clippy::too_many_arguments)]
    pub fn initialise(
        &mut self,
        authority: Pubkey,
        levels: u8,
        root_current: [u8; 32],
        min_shield: u64,
        bump: u8,
    ) {
        self.authority = authority;
        self.pending_authority = None;
        self.levels = levels;
        self.next_index = 0;
        self.root_current = root_current;
        self.min_shield = min_shield;
        self.total_shielded = 0;
        self.total_unshielded = 0;
        self.is_paused = false;
        self.bump = bump;
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, EngineError::PoolPaused);
        Ok(())
    }

    pub fn capacity(&self) -> u64 {
        1u64.checked_shl(self.levels as u32).unwrap_or(u64::MAX)
    }

    pub fn is_full(&self) -> bool {
        self.next_index >= self.capacity()
    }

    pub fn record_shield(&mut self, amount: u64) -> Result<()> {
        self.total_shielded = self
            .total_shielded
            .checked_add(amount)
            .ok_or(error!(EngineError::AmountOutOfRange))?;
        Ok(())
    }

    pub fn record_unshield(&mut self, amount: u64) -> Result<()> {
        self.total_unshielded = self
            .total_unshielded
            .checked_add(amount)
            .ok_or(error!(EngineError::AmountOutOfRange))?;
        Ok(())
    }

    pub fn propose_authority(&mut self, candidate: Pubkey) {
        self.pending_authority = Some(candidate);
    }

    pub fn accept_authority(&mut self, caller: Pubkey) -> Result<Pubkey> {
        let pending = self.pending_authority.ok_or(error!(EngineError::NoPendingAuthority))?;
        require_keys_eq!(caller, pending, EngineError::Unauthorized);
        let previous = self.authority;
        self.authority = pending;
        self.pending_authority = None;
        Ok(previous)
    }

    pub fn cancel_authority(&mut self) -> Result<()> {
        require!(self.pending_authority.is_some(), EngineError::NoPendingAuthority);
        self.pending_authority = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_matches_two_to_the_levels() {
        let mut pool = PoolState {
            authority: Pubkey::default(),
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
        pool.levels = 7;
        assert_eq!(pool.capacity(), 128);
        pool.next_index = 128;
        assert!(pool.is_full());
    }
}
