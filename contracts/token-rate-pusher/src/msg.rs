use cosmwasm_schema::{cw_serde, QueryResponses};

use utils::observer::{CapabilitiesResponse, TokenRebaseReport};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub notifier: String,
    pub messenger: String,
    pub token_rate_oracle: String,
    pub accounting_oracle: String,
    pub l2_gas_limit_for_pushing_token_rate: u32,
}

/// Same shape as `utils::observer::ObserverExecuteMsg`.
#[cw_serde]
pub enum ExecuteMsg {
    PushTokenRate { report: TokenRebaseReport },
}

/// Superset of `utils::observer::ObserverQueryMsg`.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(CapabilitiesResponse)]
    Capabilities {},
}
