//! `pause_pool` — emergency stop. Blocks `shield`, `unshield`,
//! `unshield_with_change`, and `private_transfer`; does not affect
//! already-spent nullifiers or inserted commitments.

use anchor_lang::prelude::*;

use crate::error::EngineError;
use crate::events::PoolPaused;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct PausePool<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump, has_one = authority @ EngineError::Unauthorized)]
    pub pool_state: Account<'info, PoolState>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PausePool>) -> Result<()> {
    ctx.accounts.pool_state.is_paused = true;

    emit!(PoolPaused {
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool paused");

    Ok(())
}
