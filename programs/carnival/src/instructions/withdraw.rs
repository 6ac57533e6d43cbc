use anchor_lang::prelude::*;
use crate::state::{withdraw_from_stall, Carnival, RevenueIndex, Stall};
use crate::errors::CarnivalError;
use crate::constants::*;
use crate::utils::{load_account, release_lamports, store_account};

#[derive(Accounts)]
#[instruction(stall_id: u64)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CARNIVAL_SEED],
        bump = carnival.bump,
    )]
    pub carnival: Account<'info, Carnival>,

    /// CHECK: Loaded in the handler; a missing stall fails the ownership check.
    #[account(
        mut,
        seeds = [
            STALL_SEED,
            carnival.key().as_ref(),
            stall_id.to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub stall: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump = revenue_index.bump,
    )]
    pub revenue_index: Account<'info, RevenueIndex>,
}

/// One-shot settlement. A zero balance still closes the stall.
pub fn withdraw(ctx: Context<Withdraw>, stall_id: u64, current_time_units: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let stall_info = ctx.accounts.stall.to_account_info();
    let mut stall = load_account::<Stall>(&stall_info)?;

    // Ownership, elapsed window, then the one-shot flag
    let amount = withdraw_from_stall(stall.as_mut(), &owner, current_time_units)?;
    let stall = stall.ok_or(CarnivalError::NotAuthorized)?;

    // Pay out to owner; zero balances skip the transfer
    release_lamports(&stall_info, &ctx.accounts.owner.to_account_info(), amount)?;

    // Settled stalls rank with zero revenue
    store_account(&stall_info, &stall)?;
    ctx.accounts.revenue_index.set_revenue(stall_id, stall.total_collected)?;

    emit!(WithdrawalMade {
        stall_id,
        owner,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Stall #{} settled, {} lamports withdrawn", stall_id, amount);

    Ok(())
}

#[event]
pub struct WithdrawalMade {
    pub stall_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
