use anchor_lang::prelude::*;
use crate::state::{Carnival, Stall};

pub fn is_administrator(carnival: &Carnival, principal: &Pubkey) -> bool {
    carnival.admin == *principal
}

/// False when the stall does not exist.
pub fn is_stall_owner(stall: Option<&Stall>, principal: &Pubkey) -> bool {
    stall.map_or(false, |stall| stall.owner == *principal)
}
