use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use utils::ranking::TopStalls;

declare_id!("5BT8mD8hRqcZQ9RhL9VU9Bsu3jxSeEhUXzLENrtFjnXo");

#[program]
pub mod carnival {
    use super::*;

    pub fn initialize_carnival(
        ctx: Context<InitializeCarnival>,
        admin: Pubkey,
        max_stalls: Option<u64>,
    ) -> Result<()> {
        instructions::initialize_carnival::initialize_carnival(ctx, admin, max_stalls)
    }

    pub fn register_stall(
        ctx: Context<RegisterStall>,
        name: String,
        duration_units: u8,
    ) -> Result<u64> {
        instructions::register_stall::register_stall(ctx, name, duration_units)
    }

    pub fn set_max_stalls(ctx: Context<SetMaxStalls>, new_cap: u64) -> Result<()> {
        instructions::set_max_stalls::set_max_stalls(ctx, new_cap)
    }

    pub fn pay_to_stall(ctx: Context<PayToStall>, stall_id: u64, amount: u64) -> Result<()> {
        instructions::pay_to_stall::pay_to_stall(ctx, stall_id, amount)
    }

    pub fn refund_user(
        ctx: Context<RefundUser>,
        stall_id: u64,
        payer: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::refund_user::refund_user(ctx, stall_id, payer, amount)
    }

    pub fn withdraw(
        ctx: Context<Withdraw>,
        stall_id: u64,
        current_time_units: u64,
    ) -> Result<()> {
        instructions::withdraw::withdraw(ctx, stall_id, current_time_units)
    }

    pub fn get_top_stalls(ctx: Context<GetTopStalls>, k: u64) -> Result<TopStalls> {
        instructions::get_top_stalls::get_top_stalls(ctx, k)
    }

    /// Funds only enter through `pay_to_stall`; anything unrecognised is refused.
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        msg!("Rejected unrecognised instruction");
        err!(errors::CarnivalError::DirectPaymentNotAllowed)
    }
}


#[cfg(test)]
mod tests;
