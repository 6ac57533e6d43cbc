pub mod access;
pub mod ranking;
pub mod validation;

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};
use crate::errors::CarnivalError;

pub fn string_to_bytes(input: &str, max_len: usize) -> Result<Vec<u8>> {
    require!(
        input.len() <= max_len,
        CarnivalError::InvalidStallName
    );

    let mut bytes = input.as_bytes().to_vec();
    bytes.resize(max_len, 0);
    Ok(bytes)
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec())
        .unwrap_or_default()
        .trim_end_matches('\0')
        .to_string()
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(CarnivalError::MathOverflow.into())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(CarnivalError::MathOverflow.into())
}

/// Deserializes a program account, or `None` if the address holds no such account.
pub fn load_account<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data[..];
    T::try_deserialize(&mut bytes).map(Some)
}

pub fn store_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

/// Moves lamports out of a program-owned account.
pub fn release_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = safe_sub(from.lamports(), amount)?;
    let to_balance = safe_add(to.lamports(), amount)?;
    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}
