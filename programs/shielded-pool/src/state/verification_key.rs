//! Per-statement Groth16 verification key storage.
//!
//! Generalises the Phase 2 `VerificationKeyAccount` (one VK per pool)
//! into one PDA per statement: withdraw, unshield-with-change, and
//! private-transfer each bind a different public-input vector and must
//! not share a key.

use anchor_lang::prelude::*;

use crate::crypto::groth16::VerifyingKey;
use crate::crypto::public_inputs::Statement;
use crate::error::EngineError;

/// Largest IC array this engine will allocate space for at `initialise`
/// time; statements in this engine need at most 7 (private_transfer has
/// 5 public inputs, so 6 IC points — this leaves headroom).
pub const MAX_IC_POINTS: usize = 8;

/// PDA seeds: `[b"vk", statement_tag]`.
#[account]
pub struct VerificationKeyAccount {
    pub statement: u8,
    pub alpha_g1: [u8; 64],
    pub beta_g2: [u8; 128],
    pub gamma_g2: [u8; 128],
    pub delta_g2: [u8; 128],
    pub ic: Vec<[u8; 64]>,
    pub is_initialised: bool,
    pub bump: u8,
}

impl VerificationKeyAccount {
    pub fn space(max_ic_points: usize) -> usize {
        8 // discriminator
            + 1 // statement
            + 64 // alpha_g1
            + 128 // beta_g2
            + 128 // gamma_g2
            + 128 // delta_g2
            + 4 + 64 * max_ic_points // ic (vec)
            + 1 // is_initialised
            + 1 // bump
    }

    pub fn initialise(&mut self, statement: Statement, bump: u8) {
        self.statement = statement as u8;
        self.alpha_g1 = [0u8; 64];
        self.beta_g2 = [0u8; 128];
        self.gamma_g2 = [0u8; 128];
        self.delta_g2 = [0u8; 128];
        self.ic = vec![];
        self.is_initialised = false;
        self.bump = bump;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        alpha_g1: [u8; 64],
        beta_g2: [u8; 128],
        gamma_g2: [u8; 128],
        delta_g2: [u8; 128],
        ic: Vec<[u8; 64]>,
    ) -> Result<()> {
        require!(ic.len() >= 2, EngineError::InvalidProofFormat);
        require!(!alpha_g1.iter().all(|&b| b == 0), EngineError::InvalidPoint);

        self.alpha_g1 = alpha_g1;
        self.beta_g2 = beta_g2;
        self.gamma_g2 = gamma_g2;
        self.delta_g2 = delta_g2;
        self.ic = ic;
        self.is_initialised = true;
        Ok(())
    }

    pub fn as_verifying_key(&self) -> VerifyingKey<'_> {
        VerifyingKey {
            alpha_g1: &self.alpha_g1,
            beta_g2: &self.beta_g2,
            gamma_g2: &self.gamma_g2,
            delta_g2: &self.delta_g2,
            ic: &self.ic,
        }
    }
}
