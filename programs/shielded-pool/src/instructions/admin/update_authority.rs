//! Two-step pool authority transfer: `propose_authority_transfer` sets
//! a pending candidate, `accept_authority_transfer` (signed by the
//! candidate) finalises it, `cancel_authority_transfer` withdraws a
//! pending proposal. A single-step handoff can strand the pool under
//! an authority that mistypes or doesn't control the new key; this
//! engine's `PoolState.pending_authority` exists for exactly this.

use anchor_lang::prelude::*;

use crate::error::EngineError;
use crate::events::AuthorityTransferred;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct ProposeAuthorityTransfer<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump, has_one = authority @ EngineError::Unauthorized)]
    pub pool_state: Account<'info, PoolState>,

    pub authority: Signer<'info>,
}

pub fn propose_handler(ctx: Context<ProposeAuthorityTransfer>, candidate: Pubkey) -> Result<()> {
    ctx.accounts.pool_state.propose_authority(candidate);
    msg!("authority transfer proposed to {}", candidate);
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptAuthorityTransfer<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,

    pub candidate: Signer<'info>,
}

pub fn accept_handler(ctx: Context<AcceptAuthorityTransfer>) -> Result<()> {
    let candidate = ctx.accounts.candidate.key();
    let previous = ctx.accounts.pool_state.accept_authority(candidate)?;

    emit!(AuthorityTransferred {
        previous_authority: previous,
        new_authority: candidate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("authority transferred from {} to {}", previous, candidate);

    Ok(())
}

#[derive(Accounts)]
pub struct CancelAuthorityTransfer<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump, has_one = authority @ EngineError::Unauthorized)]
    pub pool_state: Account<'info, PoolState>,

    pub authority: Signer<'info>,
}

pub fn cancel_handler(ctx: Context<CancelAuthorityTransfer>) -> Result<()> {
    ctx.accounts.pool_state.cancel_authority()?;
    msg!("pending authority transfer cancelled");
    Ok(())
}
