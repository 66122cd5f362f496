//! Native SOL custody account.
//!
//! A plain system-owned account (no data) whose lamports back the
//! pool. This engine keeps the vault owned by the program itself: an
//! Anchor-initialised PDA with a bare discriminator and no fields,
//! moved by direct lamport debit/credit rather than a
//! `system_program::transfer` CPI. The two are operationally
//! equivalent — the account still only ever holds lamports, still only
//! moves under the program's own authority — but direct lamport
//! manipulation avoids a `system_program::create_account` CPI during
//! `initialise` just to hand ownership back to the System Program. See
//! the design notes for the full rationale.

use anchor_lang::prelude::*;

/// PDA seeds: `[b"vault"]`. Lamports held here are the custody balance
/// backing every shielded note; its invariant ties this balance to the
/// sum of shielded minus unshielded amounts.
#[account]
pub struct Vault {}

impl Vault {
    pub const LEN: usize = 8; // discriminator only
}
