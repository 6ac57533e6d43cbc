use anchor_lang::prelude::*;
use crate::errors::CarnivalError;
use crate::state::Stall;
use crate::utils::access::is_stall_owner;
use crate::utils::{safe_add, safe_sub};

/// Cumulative amount one payer has paid into one stall, net of refunds.
#[account]
#[derive(InitSpace)]
pub struct PaymentRecord {
    pub stall: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl PaymentRecord {
    pub fn is_initialized(&self) -> bool {
        self.payer != Pubkey::default()
    }
}

/// Credits `amount` to both the payer's record and the stall total.
/// Nothing is written unless every check passes.
pub fn apply_payment(stall: &mut Stall, record: &mut PaymentRecord, amount: u64) -> Result<()> {
    require!(amount > 0, CarnivalError::ZeroPayment);
    require!(!stall.is_settled(), CarnivalError::StallSettled);

    let paid = safe_add(record.amount, amount)?;
    let total = safe_add(stall.total_collected, amount)?;

    record.amount = paid;
    stall.total_collected = total;
    Ok(())
}

/// Debits `amount` from the payer's record and the stall total. A missing
/// record counts as a zero payment.
pub fn apply_refund(
    stall: &mut Stall,
    record: Option<&mut PaymentRecord>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, CarnivalError::ZeroRefund);
    require!(!stall.is_settled(), CarnivalError::StallSettled);

    let record = record.ok_or(CarnivalError::RefundExceedsPayment)?;
    require!(
        record.amount >= amount,
        CarnivalError::RefundExceedsPayment
    );

    let paid = safe_sub(record.amount, amount)?;
    let total = safe_sub(stall.total_collected, amount)?;

    record.amount = paid;
    stall.total_collected = total;
    Ok(())
}

/// Payment into a stall that may not exist. Open to any payer.
pub fn pay_into_stall(
    stall: Option<&mut Stall>,
    record: &mut PaymentRecord,
    amount: u64,
) -> Result<()> {
    let stall = stall.ok_or(CarnivalError::StallNotFound)?;
    apply_payment(stall, record, amount)
}

/// Owner-only refund from a stall that may not exist.
pub fn refund_from_stall(
    stall: Option<&mut Stall>,
    caller: &Pubkey,
    record: Option<&mut PaymentRecord>,
    amount: u64,
) -> Result<()> {
    require!(
        is_stall_owner(stall.as_deref(), caller),
        CarnivalError::NotAuthorized
    );
    let stall = stall.ok_or(CarnivalError::NotAuthorized)?;
    apply_refund(stall, record, amount)
}
