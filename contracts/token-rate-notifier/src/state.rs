use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Maximum number of observers, bounds the cost of a single rebase report.
pub const MAX_OBSERVERS_COUNT: u64 = 32;

/// Gas granted to each observer for handling a single push.
pub const PUSH_TOKEN_RATE_GAS_LIMIT: u64 = 300_000;

#[cw_serde]
pub struct Config {
    /// Manages the observers list
    pub owner: Addr,
    /// The only account allowed to report token rebases
    pub rebase_caller: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Registered observers in the order they are notified in
pub const OBSERVERS: Item<Vec<Addr>> = Item::new("observers");
