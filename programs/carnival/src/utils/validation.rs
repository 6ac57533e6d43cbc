use anchor_lang::prelude::*;
use crate::errors::CarnivalError;
use crate::constants::*;

pub fn validate_duration(duration_units: u8) -> Result<()> {
    require!(
        (MIN_DURATION_UNITS..=MAX_DURATION_UNITS).contains(&duration_units),
        CarnivalError::InvalidDuration
    );
    Ok(())
}

pub fn validate_stall_name(name: &str) -> Result<()> {
    require!(
        !name.trim().is_empty() && name.len() <= MAX_STALL_NAME,
        CarnivalError::InvalidStallName
    );
    require!(
        name.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        CarnivalError::InvalidStallName
    );
    Ok(())
}
