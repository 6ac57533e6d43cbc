use anchor_lang::prelude::*;
use crate::state::{Carnival, RevenueIndex};
use crate::errors::CarnivalError;
use crate::constants::*;

#[derive(Accounts)]
pub struct InitializeCarnival<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Carnival::SIZE,
        seeds = [CARNIVAL_SEED],
        bump
    )]
    pub carnival: Account<'info, Carnival>,

    #[account(
        init,
        payer = payer,
        space = RevenueIndex::space_for(0),
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump
    )]
    pub revenue_index: Account<'info, RevenueIndex>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_carnival(
    ctx: Context<InitializeCarnival>,
    admin: Pubkey,
    max_stalls: Option<u64>,
) -> Result<()> {
    // Validation Rules
    require!(
        admin != Pubkey::default(),
        CarnivalError::InvalidAdmin
    );
    let max_stalls = max_stalls.unwrap_or(DEFAULT_MAX_STALLS);
    require!(
        max_stalls <= MAX_INDEXED_STALLS,
        CarnivalError::CapAboveIndexLimit
    );

    // Initialize registry config
    let carnival = &mut ctx.accounts.carnival;
    carnival.admin = admin;
    carnival.max_stalls = max_stalls;
    carnival.stall_count = 0;
    carnival.bump = ctx.bumps.carnival; // Store bump seed

    // Empty revenue index, grown on each registration
    let revenue_index = &mut ctx.accounts.revenue_index;
    revenue_index.carnival = carnival.key();
    revenue_index.bump = ctx.bumps.revenue_index;
    revenue_index.revenues = Vec::new();

    emit!(CarnivalInitialized {
        admin,
        max_stalls,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Carnival initialized, admin {}", admin);

    Ok(())
}

#[event]
pub struct CarnivalInitialized {
    pub admin: Pubkey,
    pub max_stalls: u64,
    pub timestamp: i64,
}
