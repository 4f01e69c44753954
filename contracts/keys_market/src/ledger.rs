//! Supply and balance bookkeeping for key markets.
//!
//! The ledger owns every `Supply` / `Balance` storage key; the market
//! engine goes through these functions and never touches the keys
//! directly. Unknown subjects and holders read as zero, so a market
//! springs into existence on its first credited buy.

use soroban_sdk::{Address, Env};

use crate::error::KeysError;
use crate::storage::DataKey;

/// Outstanding key supply of a subject's market.
pub fn supply(env: &Env, subject: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Supply(subject.clone()))
        .unwrap_or(0)
}

/// Keys held by `holder` in `subject`'s market.
pub fn balance(env: &Env, subject: &Address, holder: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(subject.clone(), holder.clone()))
        .unwrap_or(0)
}

/// Add keys to a holder's position.
pub fn credit(
    env: &Env,
    subject: &Address,
    holder: &Address,
    amount: i128,
) -> Result<(), KeysError> {
    let key = DataKey::Balance(subject.clone(), holder.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(KeysError::Overflow)?;
    env.storage().instance().set(&key, &updated);
    Ok(())
}

/// Remove keys from a holder's position.
/// Fails when the position is smaller than `amount`.
pub fn debit(
    env: &Env,
    subject: &Address,
    holder: &Address,
    amount: i128,
) -> Result<(), KeysError> {
    let key = DataKey::Balance(subject.clone(), holder.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    if amount > current {
        return Err(KeysError::InsufficientBalance);
    }
    env.storage().instance().set(&key, &(current - amount));
    Ok(())
}

/// Grow a subject's outstanding supply.
pub fn increase_supply(env: &Env, subject: &Address, amount: i128) -> Result<(), KeysError> {
    let key = DataKey::Supply(subject.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(KeysError::Overflow)?;
    env.storage().instance().set(&key, &updated);
    Ok(())
}

/// Shrink a subject's outstanding supply.
/// Fails when the market has fewer keys outstanding than `amount`.
pub fn decrease_supply(env: &Env, subject: &Address, amount: i128) -> Result<(), KeysError> {
    let key = DataKey::Supply(subject.clone());
    let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
    if amount > current {
        return Err(KeysError::SupplyUnavailable);
    }
    env.storage().instance().set(&key, &(current - amount));
    Ok(())
}
