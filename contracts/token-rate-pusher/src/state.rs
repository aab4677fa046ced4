use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use utils::accounting::ChainConfigResponse;

#[cw_serde]
pub struct Config {
    /// The only caller of `PushTokenRate`
    pub notifier: Addr,
    /// Messenger of the source chain
    pub messenger: Addr,
    /// Receiver of the pushed token rate on the destination chain
    pub token_rate_oracle: Addr,
    /// Accounting oracle whose last processed report dates the token rate
    pub accounting_oracle: Addr,
    /// Gas reserved for `UpdateRate` on the destination chain
    pub l2_gas_limit_for_pushing_token_rate: u32,
    /// Beacon chain parameters of the accounting oracle, cached at instantiation
    pub chain_config: ChainConfigResponse,
}

pub const CONFIG: Item<Config> = Item::new("config");
