use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Messenger relaying messages from the source chain
    pub messenger: Addr,
    /// Address allowed to push token rates directly
    pub bridge: Addr,
    /// Source chain contract whose relayed messages are trusted
    pub token_rate_pusher: Addr,
    /// Age after which the current token rate is considered outdated
    pub token_rate_outdated_delay: u64,
    /// How far in the future a source chain timestamp may be
    pub max_allowed_clock_lag: u64,
    /// Maximum allowed change of the token rate per day, in basis points
    pub max_deviation_bp_per_day: u64,
    /// Maximum age of a record that updates may be paused (and rolled back) on
    pub oldest_rate_allowed_in_pause_span: u64,
    /// Minimum distance between timestamps of two consecutive token rates
    pub min_time_between_updates: u64,
    /// Account allowed to initialize the contract
    pub deployer: Addr,
}

#[cw_serde]
pub enum Lifecycle {
    /// Waiting for `Initialize`
    Uninitialized,
    Initialized,
    /// Template instance that can never be initialized
    Petrified,
}

/// A single accepted observation of the token rate.
#[cw_serde]
pub struct RateRecord {
    pub rate: Uint128,
    /// Source chain time the rate was observed at
    pub origin_timestamp: u64,
    /// Destination chain time the rate was received (or last re-received) at
    pub received_timestamp: u64,
}

/// Ordered log of accepted token rates, addressed by index.
///
/// Truncation only lowers the stored length, records past it are overwritten by
/// subsequent pushes.
pub struct History<'a> {
    records: Map<'a, u64, RateRecord>,
    len: Item<'a, u64>,
}

impl<'a> History<'a> {
    pub const fn new(records_namespace: &'a str, len_namespace: &'a str) -> Self {
        Self {
            records: Map::new(records_namespace),
            len: Item::new(len_namespace),
        }
    }

    pub fn len(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(self.len.may_load(storage)?.unwrap_or_default())
    }

    pub fn get(&self, storage: &dyn Storage, index: u64) -> StdResult<Option<RateRecord>> {
        if index >= self.len(storage)? {
            return Ok(None);
        }
        self.records.may_load(storage, index)
    }

    pub fn last(&self, storage: &dyn Storage) -> StdResult<RateRecord> {
        match self.len(storage)? {
            0 => Err(StdError::not_found("token rate")),
            len => self.records.load(storage, len - 1),
        }
    }

    /// Appends `record` and returns its index.
    pub fn push(&self, storage: &mut dyn Storage, record: &RateRecord) -> StdResult<u64> {
        let index = self.len(storage)?;
        self.records.save(storage, index, record)?;
        self.len.save(storage, &(index + 1))?;
        Ok(index)
    }

    pub fn replace_last(&self, storage: &mut dyn Storage, record: &RateRecord) -> StdResult<()> {
        match self.len(storage)? {
            0 => Err(StdError::not_found("token rate")),
            len => self.records.save(storage, len - 1, record),
        }
    }

    /// Keeps only the first `len` records.
    pub fn truncate(&self, storage: &mut dyn Storage, len: u64) -> StdResult<()> {
        if len < self.len(storage)? {
            self.len.save(storage, &len)?;
        }
        Ok(())
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const LIFECYCLE: Item<Lifecycle> = Item::new("lifecycle");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const HISTORY: History<'static> = History::new("token_rates", "token_rates_len");
