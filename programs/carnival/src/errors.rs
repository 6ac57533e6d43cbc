use anchor_lang::prelude::*;

#[error_code]
pub enum CarnivalError {
    #[msg("Duration must be between 1 and 3 units")]
    InvalidDuration,

    #[msg("Stall capacity reached")]
    CapacityExceeded,

    #[msg("New cap is below the number of registered stalls")]
    CapBelowCurrentCount,

    #[msg("Unauthorized access")]
    NotAuthorized,

    #[msg("Administrator cannot be the default key")]
    InvalidAdmin,

    #[msg("Stall does not exist")]
    StallNotFound,

    #[msg("Payment amount must be greater than zero")]
    ZeroPayment,

    #[msg("Refund amount must be greater than zero")]
    ZeroRefund,

    #[msg("Refund exceeds the amount paid by this payer")]
    RefundExceedsPayment,

    #[msg("Stall collection window has not elapsed")]
    StallStillActive,

    #[msg("Stall funds already withdrawn")]
    AlreadyWithdrawn,

    #[msg("Stall is settled and no longer accepts payments or refunds")]
    StallSettled,

    #[msg("Direct payments are not allowed, use pay_to_stall")]
    DirectPaymentNotAllowed,

    #[msg("Stall name is empty, too long or contains invalid characters")]
    InvalidStallName,

    #[msg("Cap exceeds the number of stalls the revenue index can hold")]
    CapAboveIndexLimit,

    #[msg("Requested ranking does not fit in return data")]
    RankingTooLarge,

    #[msg("Revenue index does not match the stall registry")]
    RevenueIndexMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
