//! `unpause_pool` — resumes operations after `pause_pool`.

use anchor_lang::prelude::*;

use crate::error::EngineError;
use crate::events::PoolUnpaused;
use crate::state::PoolState;

#[derive(Accounts)]
pub struct UnpausePool<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump, has_one = authority @ EngineError::Unauthorized)]
    pub pool_state: Account<'info, PoolState>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpausePool>) -> Result<()> {
    ctx.accounts.pool_state.is_paused = false;

    emit!(PoolUnpaused {
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool unpaused");

    Ok(())
}
