use anchor_lang::prelude::*;
use crate::state::{Carnival, RevenueIndex};
use crate::constants::*;
use crate::utils::ranking::{rank_index, TopStalls};

#[derive(Accounts)]
pub struct GetTopStalls<'info> {
    #[account(
        seeds = [CARNIVAL_SEED],
        bump = carnival.bump,
    )]
    pub carnival: Account<'info, Carnival>,

    #[account(
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump = revenue_index.bump,
    )]
    pub revenue_index: Account<'info, RevenueIndex>,
}

/// Read-only. Result is returned through return data.
pub fn get_top_stalls(ctx: Context<GetTopStalls>, k: u64) -> Result<TopStalls> {
    let top = rank_index(&ctx.accounts.carnival, &ctx.accounts.revenue_index, k)?;

    msg!(
        "Top {} of {} stalls: {:?}",
        top.ids.len(),
        ctx.accounts.carnival.stall_count,
        top.ids
    );

    Ok(top)
}
