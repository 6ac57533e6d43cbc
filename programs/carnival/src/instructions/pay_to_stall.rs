use anchor_lang::prelude::*;
use crate::state::{pay_into_stall, Carnival, PaymentRecord, RevenueIndex, Stall};
use crate::errors::CarnivalError;
use crate::constants::*;
use crate::utils::{load_account, store_account};

#[derive(Accounts)]
#[instruction(stall_id: u64)]
pub struct PayToStall<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [CARNIVAL_SEED],
        bump = carnival.bump,
    )]
    pub carnival: Account<'info, Carnival>,

    /// CHECK: Loaded in the handler so a missing stall reports `StallNotFound`.
    /// Address is bound to `stall_id` by seeds.
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
        init_if_needed,
        payer = payer,
        space = 8 + PaymentRecord::INIT_SPACE,
        seeds = [
            PAYMENT_SEED,
            stall.key().as_ref(),
            payer.key().as_ref()
        ],
        bump,
    )]
    pub payment: Account<'info, PaymentRecord>,

    #[account(
        mut,
        seeds = [REVENUE_INDEX_SEED, carnival.key().as_ref()],
        bump = revenue_index.bump,
    )]
    pub revenue_index: Account<'info, RevenueIndex>,

    pub system_program: Program<'info, System>,
}

/// Any signer may pay any existing stall. Lamports are held by the stall account.
pub fn pay_to_stall(ctx: Context<PayToStall>, stall_id: u64, amount: u64) -> Result<()> {
    let stall_info = ctx.accounts.stall.to_account_info();
    let mut stall = load_account::<Stall>(&stall_info)?;

    // First payment from this payer creates the record
    let payer = ctx.accounts.payer.key();
    let payment = &mut ctx.accounts.payment;
    if !payment.is_initialized() {
        payment.stall = stall_info.key();
        payment.payer = payer;
        payment.bump = ctx.bumps.payment;
    }

    // Validate and update ledger totals before moving funds
    pay_into_stall(stall.as_mut(), payment, amount)?;
    let stall = stall.ok_or(CarnivalError::StallNotFound)?;

    // Transfer to stall
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: stall_info.clone(),
            },
        ),
        amount,
    )?;

    // Persist stall and ranking entry
    store_account(&stall_info, &stall)?;
    ctx.accounts.revenue_index.set_revenue(stall_id, stall.total_collected)?;

    emit!(PaymentMade {
        stall_id,
        payer,
        amount,
        total_collected: stall.total_collected,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Paid {} lamports to stall #{}", amount, stall_id);

    Ok(())
}

#[event]
pub struct PaymentMade {
    pub stall_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub total_collected: u64,
    pub timestamp: i64,
}
