use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Entry point of the cross-chain transport. Delivery is asynchronous, unordered and
/// at-least-once; the sender never learns about the outcome.
#[cw_serde]
pub enum MessengerExecuteMsg {
    SendMessage {
        /// Contract on the destination chain
        target: String,
        /// Raw `ExecuteMsg` the target receives
        message: Binary,
        /// Gas reserved for executing `message` on the destination chain
        min_gas_limit: u32,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum MessengerQueryMsg {
    /// Original sender of the message being relayed right now. Only meaningful while the
    /// messenger is executing a relayed message.
    #[returns(CrossDomainMessageSenderResponse)]
    CrossDomainMessageSender {},
}

#[cw_serde]
pub struct CrossDomainMessageSenderResponse {
    pub sender: Option<Addr>,
}
