//! `set_verification_key` — authority-gated configuration of one of the
//! three per-statement Groth16 verification keys. VKs are deployment
//! parameters with no canonical bytes baked into the program; this
//! instruction is how they get set after `initialise` has allocated
//! the three empty slots.

use anchor_lang::prelude::*;

use crate::crypto::curve::validate_g1_on_curve;
use crate::crypto::public_inputs::Statement;
use crate::error::EngineError;
use crate::events::VerificationKeySet;
use crate::state::{verification_key::MAX_IC_POINTS, PoolState, VerificationKeyAccount};

#[derive(Accounts)]
#[instruction(statement: Statement)]
pub struct SetVerificationKey<'info> {
    #[account(seeds = [b"pool"], bump = pool_state.bump, has_one = authority @ EngineError::Unauthorized)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [b"vk", &statement.tag()],
        bump = verification_key.bump,
    )]
    pub verification_key: Account<'info, VerificationKeyAccount>,

    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<SetVerificationKey>,
    statement: Statement,
    alpha_g1: [u8; 64],
    beta_g2: [u8; 128],
    gamma_g2: [u8; 128],
    delta_g2: [u8; 128],
    ic: Vec<[u8; 64]>,
) -> Result<()> {
    require!(
        ic.len() <= MAX_IC_POINTS,
        EngineError::InvalidProofFormat
    );
    validate_g1_on_curve(&alpha_g1)?;
    for point in &ic {
        validate_g1_on_curve(point)?;
    }

    ctx.accounts
        .verification_key
        .set(alpha_g1, beta_g2, gamma_g2, delta_g2, ic.clone())?;

    emit!(VerificationKeySet {
        authority: ctx.accounts.authority.key(),
        statement: statement as u8,
        ic_len: ic.len() as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "verification key set: statement={} ic_points={}",
        statement as u8,
        ic.len()
    );

    Ok(())
}
