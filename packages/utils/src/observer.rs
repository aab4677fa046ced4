use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Accounting numbers reported after every rebase of the staked token. Mirrors the
/// arguments of the post-rebase hook on the source chain.
#[cw_serde]
#[derive(Default)]
pub struct TokenRebaseReport {
    /// Timestamp of the accounting report
    pub report_timestamp: u64,
    /// Seconds elapsed since the previous report
    pub time_elapsed: u64,
    pub pre_total_shares: Uint128,
    pub pre_total_ether: Uint128,
    pub post_total_shares: Uint128,
    pub post_total_ether: Uint128,
    pub shares_minted_as_fees: Uint128,
}

/// Messages every observer registered in the notifier must accept.
#[cw_serde]
pub enum ObserverExecuteMsg {
    /// Push the token rate described by `report` to wherever the observer delivers it.
    PushTokenRate { report: TokenRebaseReport },
}

/// Queries every observer registered in the notifier must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum ObserverQueryMsg {
    /// Asked by the notifier once, when a candidate gets registered.
    #[returns(CapabilitiesResponse)]
    Capabilities {},
}

#[cw_serde]
pub struct CapabilitiesResponse {
    /// Whether the contract handles `ObserverExecuteMsg::PushTokenRate`
    pub push_token_rate: bool,
}
