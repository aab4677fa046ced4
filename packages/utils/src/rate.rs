use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Uint128, Uint256};

/// Number of decimals every token rate is scaled by.
pub const RATE_DECIMALS: u8 = 27;
pub const BASIS_POINT_SCALE: u128 = 10_000;
pub const ONE_DAY_SECONDS: u64 = 24 * 60 * 60;

/// One whole unit of the pooled asset per share, i.e. `10^27`.
pub fn rate_unit() -> Uint128 {
    Uint128::new(10u128.pow(RATE_DECIMALS as u32))
}

/// Amount of pooled asset backing a single share, scaled by [`RATE_DECIMALS`].
/// Fails on zero `total_shares` and on a result that does not fit into 128 bits.
pub fn token_rate_from_totals(total_pooled: Uint128, total_shares: Uint128) -> StdResult<Uint128> {
    let rate = total_pooled
        .full_mul(rate_unit())
        .checked_div(Uint256::from(total_shares))?;
    Ok(Uint128::try_from(rate)?)
}

/// Number of started days between two timestamps. Never less than one.
pub fn elapsed_days_ceil(from: u64, to: u64) -> u64 {
    let elapsed = to.saturating_sub(from);
    let days = elapsed / ONE_DAY_SECONDS + u64::from(elapsed % ONE_DAY_SECONDS != 0);
    days.max(1)
}

/// Relative distance between `current` and `new` in basis points, rounded down.
/// `current` has to be non zero.
pub fn deviation_bp(current: Uint128, new: Uint128) -> StdResult<Uint256> {
    let diff = current.max(new) - current.min(new);
    Ok(diff
        .full_mul(Uint128::new(BASIS_POINT_SCALE))
        .checked_div(Uint256::from(current))?)
}

/// Message accepted by every contract able to receive a token rate.
/// Serializes to the same JSON as the oracle's own `UpdateRate` variant.
#[cw_serde]
pub enum RateReceiverExecuteMsg {
    UpdateRate {
        token_rate: Uint128,
        rate_timestamp: u64,
    },
}
