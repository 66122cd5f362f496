//! `initialise` — one-shot allocation of all four state components plus
//! the three per-statement verification-key slots and the native SOL
//! vault.

use anchor_lang::prelude::*;

use crate::crypto::public_inputs::Statement;
use crate::events::PoolInitialised;
use crate::state::{
    merkle_tree::MerkleTree, pool_state::PoolState, roots_ring::RootsRing,
    verification_key::VerificationKeyAccount, vault::Vault,
};

#[derive(Accounts)]
#[instruction(levels: u8, roots_ring_size: u16, min_shield: u64)]
pub struct Initialise<'info> {
    #[account(
        init,
        payer = authority,
        space = PoolState::LEN,
        seeds = [b"pool"],
        bump
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        init,
        payer = authority,
        space = MerkleTree::space(levels),
        seeds = [b"merkle_tree"],
        bump
    )]
    pub merkle_tree: Box<Account<'info, MerkleTree>>,

    #[account(
        init,
        payer = authority,
        space = RootsRing::space(roots_ring_size),
        seeds = [b"roots_history"],
        bump
    )]
    pub roots_ring: Box<Account<'info, RootsRing>>,

    #[account(
        init,
        payer = authority,
        space = Vault::LEN,
        seeds = [b"vault"],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init,
        payer = authority,
        space = VerificationKeyAccount::space(crate::state::verification_key::MAX_IC_POINTS),
        seeds = [b"vk", &Statement::Withdraw.tag()],
        bump
    )]
    pub vk_withdraw: Box<Account<'info, VerificationKeyAccount>>,

    #[account(
        init,
        payer = authority,
        space = VerificationKeyAccount::space(crate::state::verification_key::MAX_IC_POINTS),
        seeds = [b"vk", &Statement::UnshieldWithChange.tag()],
        bump
    )]
    pub vk_unshield_with_change: Box<Account<'info, VerificationKeyAccount>>,

    #[account(
        init,
        payer = authority,
        space = VerificationKeyAccount::space(crate::state::verification_key::MAX_IC_POINTS),
        seeds = [b"vk", &Statement::PrivateTransfer.tag()],
        bump
    )]
    pub vk_private_transfer: Box<Account<'info, VerificationKeyAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialise>,
    levels: u8,
    roots_ring_size: u16,
    min_shield: u64,
) -> Result<()> {
    let merkle_tree = &mut ctx.accounts.merkle_tree;
    merkle_tree.initialise(levels)?;
    let genesis_root = merkle_tree.root();

    ctx.accounts.pool_state.initialise(
        ctx.accounts.authority.key(),
        levels,
        genesis_root,
        min_shield,
        ctx.bumps.pool_state,
    );

    ctx.accounts
        .roots_ring
        .initialise(roots_ring_size, genesis_root)?;

    ctx.accounts
        .vk_withdraw
        .initialise(Statement::Withdraw, ctx.bumps.vk_withdraw);
    ctx.accounts
        .vk_unshield_with_change
        .initialise(Statement::UnshieldWithChange, ctx.bumps.vk_unshield_with_change);
    ctx.accounts
        .vk_private_transfer
        .initialise(Statement::PrivateTransfer, ctx.bumps.vk_private_transfer);

    emit!(PoolInitialised {
        authority: ctx.accounts.authority.key(),
        levels,
        roots_ring_size,
        min_shield,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("pool initialised: levels={} roots_ring_size={}", levels, roots_ring_size);

    Ok(())
}
