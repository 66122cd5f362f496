//! `shield` — deposit native SOL under a commitment. No proof, no
//! nullifier touched; the depositor's privacy derives purely from the
//! anonymity set at withdraw time.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::EngineError;
use crate::events::Shielded;
use crate::state::{MerkleTree, PoolState, RootsRing, Vault};

#[derive(Accounts)]
pub struct Shield<'info> {
    #[account(mut, seeds = [b"pool"], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(mut, seeds = [b"merkle_tree"], bump)]
    pub merkle_tree: Account<'info, MerkleTree>,

    #[account(mut, seeds = [b"roots_history"], bump)]
    pub roots_ring: Account<'info, RootsRing>,

    #[account(mut, seeds = [b"vault"], bump)]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Shield>, commitment: [u8; 32], amount: u64) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;
    pool_state.require_not_paused()?;

    require!(amount >= pool_state.min_shield, EngineError::BelowMinimum);
    require!(!pool_state.is_full(), EngineError::TreeFull);
    require!(
        crate::crypto::field::is_valid_fr(&commitment),
        EngineError::PublicInputOutOfRange
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let leaf_index = pool_state.next_index;
    let new_root = ctx.accounts.merkle_tree.insert(leaf_index, commitment)?;
    pool_state.next_index = pool_state
        .next_index
        .checked_add(1)
        .ok_or(error!(EngineError::TreeFull))?;
    pool_state.root_current = new_root;
    pool_state.record_shield(amount)?;
    ctx.accounts.roots_ring.push(new_root);

    emit!(Shielded {
        commitment,
        leaf_index,
        new_root,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("shield: leaf_index={} amount={}", leaf_index, amount);

    Ok(())
}
