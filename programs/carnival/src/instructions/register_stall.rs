use anchor_lang::prelude::*;
use crate::state::{Carnival, RevenueIndex, Stall};
use crate::errors::CarnivalError;
use crate::constants::*;
use crate::utils::string_to_bytes;
use crate::utils::validation::validate_stall_name;

#[derive(Accounts)]
pub struct RegisterStall<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CARNIVAL_SEED],
        bump = carnival.bump,
    )]
    pub carnival: Account<'info, Carnival>,

    #[account(
        init,
        payer = owner,
        seeds = [
            STALL_SEED,
            carnival.key().as_ref(),
            carnival.next_stall_id().to_le_bytes().as_ref()
        ],
        bump,
        space = 8 + Stall::SIZE,
    )]
    pub stall: Account<'info, Stall>,

    // Registrant pays for the extra index entry
    #[account(
        mut,
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump = revenue_index.bump,
        realloc = RevenueIndex::space_for(carnival.next_stall_id()),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub revenue_index: Account<'info, RevenueIndex>,

    pub system_program: Program<'info, System>,
}

/// Any signer may register a stall and becomes its owner. Returns the new id.
pub fn register_stall(
    ctx: Context<RegisterStall>,
    name: String,
    duration_units: u8,
) -> Result<u64> {
    // Validate name, then duration and capacity while allocating the id
    validate_stall_name(&name)?;

    let carnival_key = ctx.accounts.carnival.key();
    let owner = ctx.accounts.owner.key();
    let stall_id = ctx.accounts.carnival.register_stall(duration_units)?;

    // Initialize stall state
    let stall = &mut ctx.accounts.stall;
    stall.set_inner(Stall {
        carnival: carnival_key,
        id: stall_id,
        name: string_to_bytes(&name, MAX_STALL_NAME)?
            .try_into()
            .map_err(|_| CarnivalError::InvalidStallName)?,
        owner,
        duration_units,
        total_collected: 0,
        withdrawn: false,
        bump: ctx.bumps.stall,
    });

    // New stalls enter the ranking with zero revenue
    ctx.accounts.revenue_index.track_stall(stall_id)?;

    emit!(StallRegistered {
        stall_id,
        stall: stall.key(),
        owner,
        duration_units,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Stall #{} '{}' registered for {} units", stall_id, name, duration_units);

    Ok(stall_id)
}

#[event]
pub struct StallRegistered {
    pub stall_id: u64,
    pub stall: Pubkey,
    pub owner: Pubkey,
    pub duration_units: u8,
    pub timestamp: i64,
}
