use anchor_lang::prelude::*;
use crate::errors::CarnivalError;
use crate::utils::ranking::StallRevenue;

/// Registry-owned mirror of every stall's `total_collected`, ranked without
/// touching the stall accounts. Grows by one entry per registration.
#[account]
pub struct RevenueIndex {
    pub carnival: Pubkey,          // 32 bytes
    pub bump: u8,                  // 1 byte
    pub revenues: Vec<u64>,        // 4 + 8 per stall - entry i is stall id i + 1
}

impl RevenueIndex {
    pub const BASE_SIZE: usize = 32 + 1 + 4;

    /// Account space (with discriminator) for an index of `stall_count` entries.
    pub fn space_for(stall_count: u64) -> usize {
        8 + Self::BASE_SIZE + 8 * stall_count as usize
    }

    pub fn len(&self) -> u64 {
        self.revenues.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty()
    }

    /// Appends a zero entry. Ids must arrive in registration order.
    pub fn track_stall(&mut self, stall_id: u64) -> Result<()> {
        require!(
            stall_id == self.len() + 1,
            CarnivalError::RevenueIndexMismatch
        );
        self.revenues.push(0);
        Ok(())
    }

    pub fn set_revenue(&mut self, stall_id: u64, total_collected: u64) -> Result<()> {
        let slot = stall_id
            .checked_sub(1)
            .and_then(|i| self.revenues.get_mut(i as usize))
            .ok_or(CarnivalError::RevenueIndexMismatch)?;
        *slot = total_collected;
        Ok(())
    }

    pub fn revenue(&self, stall_id: u64) -> Option<u64> {
        stall_id
            .checked_sub(1)
            .and_then(|i| self.revenues.get(i as usize))
            .copied()
    }

    pub fn entries(&self) -> Vec<StallRevenue> {
        self.revenues
            .iter()
            .enumerate()
            .map(|(i, revenue)| (i as u64 + 1, *revenue))
            .collect()
    }
}
