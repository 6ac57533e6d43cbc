use anchor_lang::prelude::*;
use crate::constants::MAX_INDEXED_STALLS;
use crate::errors::CarnivalError;
use crate::utils::safe_add;
use crate::utils::validation::validate_duration;

/// Singleton registry config. Owns the stall id sequence.
#[account]
pub struct Carnival {
    pub admin: Pubkey,             // 32 bytes - fixed at initialization
    pub max_stalls: u64,           // 8 bytes - registration cap
    pub stall_count: u64,          // 8 bytes - highest assigned id
    pub bump: u8,                  // 1 byte
}

impl Carnival {
    pub const SIZE: usize = 32 + 8 + 8 + 1;

    /// Id the next registered stall will receive. Used to derive its PDA.
    pub fn next_stall_id(&self) -> u64 {
        self.stall_count.saturating_add(1)
    }

    pub fn has_stall(&self, stall_id: u64) -> bool {
        stall_id >= 1 && stall_id <= self.stall_count
    }

    /// Validates a registration and allocates the next sequential id.
    pub fn register_stall(&mut self, duration_units: u8) -> Result<u64> {
        validate_duration(duration_units)?;
        require!(
            self.stall_count < self.max_stalls,
            CarnivalError::CapacityExceeded
        );

        self.stall_count = safe_add(self.stall_count, 1)?;
        Ok(self.stall_count)
    }

    pub fn set_max_stalls(&mut self, new_cap: u64) -> Result<()> {
        require!(
            new_cap >= self.stall_count,
            CarnivalError::CapBelowCurrentCount
        );
        require!(
            new_cap <= MAX_INDEXED_STALLS,
            CarnivalError::CapAboveIndexLimit
        );
        self.max_stalls = new_cap;
        Ok(())
    }
}
