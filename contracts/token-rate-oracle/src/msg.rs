use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::access::Role;
use crate::state::{Config, Lifecycle, RateRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Messenger delivering messages from the source chain
    pub messenger: String,
    /// Bridge address allowed to update the token rate directly
    pub bridge: String,
    /// Source chain pusher whose relayed messages update the token rate
    pub token_rate_pusher: String,
    /// The token rate is considered outdated after this many seconds without an update
    pub token_rate_outdated_delay: u64,
    /// Maximum number of seconds a source chain timestamp may run ahead of local time
    pub max_allowed_clock_lag: u64,
    /// Allowed token rate change per day, in basis points. At most 10000.
    pub max_deviation_bp_per_day: u64,
    /// Only records received within this many seconds may become a pause anchor
    pub oldest_rate_allowed_in_pause_span: u64,
    /// Updates closer than this many seconds to the current token rate are ignored
    pub min_time_between_updates: u64,
    /// Marks this instance as a template that can never be initialized
    #[serde(default)]
    pub petrified: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Seed the token rate history and appoint the admin. Only callable once by the account
    /// that instantiated the contract.
    Initialize {
        admin: String,
        token_rate: Uint128,
        rate_timestamp: u64,
    },
    /// Report a new token rate observed on the source chain at `rate_timestamp`. Only callable
    /// by the bridge, or by the messenger while relaying a message from the token rate pusher.
    UpdateRate {
        token_rate: Uint128,
        rate_timestamp: u64,
    },
    /// Roll the history back to the record at `index` and stop accepting updates.
    /// Requires the `RateUpdateDisabler` role.
    PauseTokenRateUpdates { index: u64 },
    /// Append a new trusted token rate and start accepting updates again.
    /// Requires the `RateUpdateEnabler` role.
    ResumeTokenRateUpdates {
        token_rate: Uint128,
        rate_timestamp: u64,
    },
    /// Only callable by accounts holding the `Admin` role.
    GrantRole { role: Role, account: String },
    /// Only callable by accounts holding the `Admin` role.
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Lifecycle)]
    ContractState {},
    /// The most recent token rate.
    #[returns(RateRecord)]
    CurrentRate {},
    /// The most recent token rate in the shape of a price feed round.
    #[returns(RoundDataResponse)]
    LatestRoundData {},
    #[returns(Uint128)]
    LatestAnswer {},
    #[returns(u8)]
    Decimals {},
    #[returns(SaneRangeResponse)]
    SaneRange {},
    #[returns(u64)]
    TokenRatesLength {},
    #[returns(RateRecord)]
    TokenRateByIndex { index: u64 },
    #[returns(bool)]
    IsPaused {},
    /// Whether the current token rate is older than the outdated delay, or updates are paused.
    #[returns(bool)]
    IsLikelyOutdated {},
    #[returns(bool)]
    HasRole { role: Role, account: String },
}

#[cw_serde]
pub struct RoundDataResponse {
    /// Source chain timestamp of the token rate
    pub round_id: u64,
    pub answer: Uint128,
    pub started_at: u64,
    /// Local time the token rate was last received at
    pub updated_at: u64,
    pub answered_in_round: u64,
}

impl From<RateRecord> for RoundDataResponse {
    fn from(record: RateRecord) -> Self {
        Self {
            round_id: record.origin_timestamp,
            answer: record.rate,
            started_at: record.origin_timestamp,
            updated_at: record.received_timestamp,
            answered_in_round: record.origin_timestamp,
        }
    }
}

#[cw_serde]
pub struct SaneRangeResponse {
    pub min: Uint128,
    pub max: Uint128,
}
