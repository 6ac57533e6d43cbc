use anchor_lang::prelude::*;
use crate::state::Carnival;
use crate::errors::CarnivalError;
use crate::constants::*;
use crate::utils::access::is_administrator;

#[derive(Accounts)]
pub struct SetMaxStalls<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CARNIVAL_SEED],
        bump = carnival.bump,
    )]
    pub carnival: Account<'info, Carnival>,
}

pub fn set_max_stalls(ctx: Context<SetMaxStalls>, new_cap: u64) -> Result<()> {
    let carnival = &mut ctx.accounts.carnival;

    // Only the administrator may change the cap
    require!(
        is_administrator(carnival, &ctx.accounts.admin.key()),
        CarnivalError::NotAuthorized
    );

    // Cap must cover existing stalls and fit the revenue index
    let previous_cap = carnival.max_stalls;
    carnival.set_max_stalls(new_cap)?;

    emit!(MaxStallsUpdated {
        previous_cap,
        new_cap,
        stall_count: carnival.stall_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Max stalls updated from {} to {}", previous_cap, new_cap);

    Ok(())
}

#[event]
pub struct MaxStallsUpdated {
    pub previous_cap: u64,
    pub new_cap: u64,
    pub stall_count: u64,
    pub timestamp: i64,
}
