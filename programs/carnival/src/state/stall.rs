use anchor_lang::prelude::*;
use crate::constants::MAX_STALL_NAME;
use crate::errors::CarnivalError;
use crate::utils::access::is_stall_owner;
use crate::utils::bytes_to_string;

#[account]
pub struct Stall {
    pub carnival: Pubkey,                 // 32 bytes - parent registry
    pub id: u64,                          // 8 bytes - sequential, starts at 1
    pub name: [u8; 32],                   // 32 bytes - zero padded
    pub owner: Pubkey,                    // 32 bytes - registering signer
    pub duration_units: u8,               // 1 byte - 1..=3
    pub total_collected: u64,             // 8 bytes - net lamports held
    pub withdrawn: bool,                  // 1 byte - settled flag
    pub bump: u8,                         // 1 byte
}

impl Stall {
    pub const SIZE: usize = 32 + 8 + MAX_STALL_NAME + 32 + 1 + 8 + 1 + 1;

    pub fn display_name(&self) -> String {
        bytes_to_string(&self.name)
    }

    pub fn is_settled(&self) -> bool {
        self.withdrawn
    }

    pub fn is_collection_closed(&self, current_time_units: u64) -> bool {
        current_time_units >= self.duration_units as u64
    }

    /// Closes the stall. Returns the amount the owner receives, which may be zero.
    pub fn settle(&mut self, current_time_units: u64) -> Result<u64> {
        require!(
            self.is_collection_closed(current_time_units),
            CarnivalError::StallStillActive
        );
        require!(!self.withdrawn, CarnivalError::AlreadyWithdrawn);

        let amount = self.total_collected;
        self.withdrawn = true;
        self.total_collected = 0;
        Ok(amount)
    }
}

/// Owner-only settlement of a stall that may not exist.
/// A missing stall has no owner, so it fails the ownership check.
pub fn withdraw_from_stall(
    stall: Option<&mut Stall>,
    caller: &Pubkey,
    current_time_units: u64,
) -> Result<u64> {
    require!(
        is_stall_owner(stall.as_deref(), caller),
        CarnivalError::NotAuthorized
    );
    let stall = stall.ok_or(CarnivalError::NotAuthorized)?;
    stall.settle(current_time_units)
}
