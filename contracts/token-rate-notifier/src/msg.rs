use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use utils::observer::TokenRebaseReport;

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub rebase_caller: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers an observer to be notified about every token rebase.
    /// The observer has to answer `Capabilities {}` with `push_token_rate: true`.
    AddObserver { observer: String },
    /// The last registered observer takes the place of the removed one.
    RemoveObserver { observer: String },
    /// Pushes the report to all observers. An observer failing with an error is reported
    /// with an event and skipped.
    HandlePostTokenRebase { report: TokenRebaseReport },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(ObserversResponse)]
    Observers {},
    #[returns(u64)]
    ObserversLength {},
    #[returns(u64)]
    MaxObserversCount {},
}

#[cw_serde]
pub struct ObserversResponse {
    pub observers: Vec<Addr>,
}
