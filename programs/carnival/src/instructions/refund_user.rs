use anchor_lang::prelude::*;
use crate::state::{refund_from_stall, Carnival, PaymentRecord, RevenueIndex, Stall};
use crate::errors::CarnivalError;
use crate::constants::*;
use crate::utils::{load_account, release_lamports, store_account};

#[derive(Accounts)]
#[instruction(stall_id: u64, payer: Pubkey)]
pub struct RefundUser<'info> {
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

    /// CHECK: Loaded in the handler; a missing record is a zero payment.
    #[account(
        mut,
        seeds = [
            PAYMENT_SEED,
            stall.key().as_ref(),
            payer.as_ref()
        ],
        bump,
    )]
    pub payment: UncheckedAccount<'info>,

    /// CHECK: Only credited. Any owner is accepted so a payer whose account
    /// changed owner since paying can still be refunded.
    #[account(mut, address = payer)]
    pub payer_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump = revenue_index.bump,
    )]
    pub revenue_index: Account<'info, RevenueIndex>,
}

/// Stall owner returns part or all of one payer's contribution.
pub fn refund_user(
    ctx: Context<RefundUser>,
    stall_id: u64,
    payer: Pubkey,
    amount: u64,
) -> Result<()> {
    let stall_info = ctx.accounts.stall.to_account_info();
    let payment_info = ctx.accounts.payment.to_account_info();
    let mut stall = load_account::<Stall>(&stall_info)?;
    let mut payment = load_account::<PaymentRecord>(&payment_info)?;

    // Ownership first, then refund bounds against the payer's record
    refund_from_stall(
        stall.as_mut(),
        &ctx.accounts.owner.key(),
        payment.as_mut(),
        amount,
    )?;
    let stall = stall.ok_or(CarnivalError::NotAuthorized)?;

    // Return lamports held by the stall
    release_lamports(&stall_info, &ctx.accounts.payer_account.to_account_info(), amount)?;

    // Persist stall, record and ranking entry
    store_account(&stall_info, &stall)?;
    if let Some(record) = &payment {
        store_account(&payment_info, record)?;
    }
    ctx.accounts.revenue_index.set_revenue(stall_id, stall.total_collected)?;

    emit!(RefundIssued {
        stall_id,
        payer,
        amount,
        total_collected: stall.total_collected,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Refunded {} lamports from stall #{} to {}", amount, stall_id, payer);

    Ok(())
}

#[event]
pub struct RefundIssued {
    pub stall_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub total_collected: u64,
    pub timestamp: i64,
}
