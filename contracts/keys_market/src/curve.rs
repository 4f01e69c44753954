//! Bonding-curve pricing for key trades.
//!
//! The curve charges a flat base plus a quadratic step on the supply
//! level reached by the trade:
//!
//!   price(supply, amount) = BASE_PRICE + amount * ((supply + amount)^2 / PRICE_DIVISOR)
//!
//! All values are micro-units. The constants are calibrated so that
//! price(0, 200) = 80_010. An empty trade quotes 0. Integer division
//! flattens the quadratic step for small markets: quotes are strictly
//! increasing in amount once supply + amount reaches 10, and in supply
//! once consecutive squared steps differ after division (guaranteed
//! from supply + amount = 50); below that, neighboring quotes can tie.

use crate::error::KeysError;
use crate::storage::{BASE_PRICE, FEE_DENOMINATOR, PRICE_DIVISOR};

/// Gross price to move a subject's supply from `supply` to `supply + amount`.
pub fn price(supply: i128, amount: i128) -> Result<i128, KeysError> {
    if supply < 0 || amount < 0 {
        return Err(KeysError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(0);
    }

    let reached = supply.checked_add(amount).ok_or(KeysError::Overflow)?;
    let step = reached
        .checked_mul(reached)
        .ok_or(KeysError::Overflow)?
        .checked_div(PRICE_DIVISOR)
        .ok_or(KeysError::Overflow)?;
    let scaled = amount.checked_mul(step).ok_or(KeysError::Overflow)?;

    BASE_PRICE.checked_add(scaled).ok_or(KeysError::Overflow)
}

/// Protocol fee on a gross price, in basis points over FEE_DENOMINATOR.
/// Truncates toward zero, so dust-level trades can carry no fee.
pub fn protocol_fee(gross: i128, fee_bps: i128) -> Result<i128, KeysError> {
    gross
        .checked_mul(fee_bps)
        .ok_or(KeysError::Overflow)?
        .checked_div(FEE_DENOMINATOR)
        .ok_or(KeysError::Overflow)
}
