use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Reply, Response,
    StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use utils::messenger::CrossDomainMessageSenderResponse;

const RELAY_REPLY_ID: u64 = 1;

const MESSAGES: Map<u64, SentMessage> = Map::new("messages");
const NEXT_NONCE: Item<u64> = Item::new("next_nonce");
const XDOMAIN_SENDER: Item<Addr> = Item::new("xdomain_sender");
const RELAYING: Item<u64> = Item::new("relaying");

#[cw_serde]
pub struct SentMessage {
    pub sender: Addr,
    pub target: Addr,
    pub message: Binary,
    pub min_gas_limit: u32,
}

// Superset of `utils::messenger::MessengerExecuteMsg`, both sides of the bridge live here.
#[cw_serde]
pub enum ExecuteMsg {
    SendMessage {
        target: String,
        message: Binary,
        min_gas_limit: u32,
    },
    /// Deliver a queued message. Any nonce may be relayed at any time and any number of times.
    RelayMessage { nonce: u64 },
    /// Lets tests call a target directly while pretending to relay.
    SetCrossDomainMessageSender { sender: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CrossDomainMessageSenderResponse)]
    CrossDomainMessageSender {},
    #[returns(SentMessage)]
    SentMessage { nonce: u64 },
    /// Number of messages sent so far, also the nonce of the next one.
    #[returns(u64)]
    MessageNonce {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    NEXT_NONCE.save(deps.storage, &0)?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SendMessage {
            target,
            message,
            min_gas_limit,
        } => {
            let nonce = NEXT_NONCE.load(deps.storage)?;
            let sent = SentMessage {
                sender: info.sender,
                target: deps.api.addr_validate(&target)?,
                message,
                min_gas_limit,
            };
            MESSAGES.save(deps.storage, nonce, &sent)?;
            NEXT_NONCE.save(deps.storage, &(nonce + 1))?;

            Ok(Response::new().add_event(
                Event::new("sent_message")
                    .add_attribute("target", sent.target)
                    .add_attribute("sender", sent.sender)
                    .add_attribute("message", sent.message.to_base64())
                    .add_attribute("nonce", nonce.to_string())
                    .add_attribute("min_gas_limit", min_gas_limit.to_string()),
            ))
        }
        ExecuteMsg::RelayMessage { nonce } => {
            let sent = MESSAGES.load(deps.storage, nonce)?;
            XDOMAIN_SENDER.save(deps.storage, &sent.sender)?;
            RELAYING.save(deps.storage, &nonce)?;

            let msg = WasmMsg::Execute {
                contract_addr: sent.target.to_string(),
                msg: sent.message,
                funds: vec![],
            };
            Ok(Response::new()
                .add_attribute("action", "relay_message")
                .add_attribute("nonce", nonce.to_string())
                .add_submessage(
                    SubMsg::reply_always(msg, RELAY_REPLY_ID)
                        .with_gas_limit(u64::from(sent.min_gas_limit)),
                ))
        }
        ExecuteMsg::SetCrossDomainMessageSender { sender } => {
            match sender {
                Some(sender) => {
                    XDOMAIN_SENDER.save(deps.storage, &deps.api.addr_validate(&sender)?)?
                }
                None => XDOMAIN_SENDER.remove(deps.storage),
            }
            Ok(Response::new())
        }
    }
}

pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> StdResult<Response> {
    let nonce = RELAYING.load(deps.storage)?;
    RELAYING.remove(deps.storage);
    XDOMAIN_SENDER.remove(deps.storage);

    // A failed delivery is recorded, never propagated, as on a real bridge.
    let event = match msg.result {
        SubMsgResult::Ok(_) => Event::new("relayed_message"),
        SubMsgResult::Err(reason) => {
            Event::new("failed_relayed_message").add_attribute("reason", reason)
        }
    };
    Ok(Response::new().add_event(event.add_attribute("nonce", nonce.to_string())))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CrossDomainMessageSender {} => to_binary(&CrossDomainMessageSenderResponse {
            sender: XDOMAIN_SENDER.may_load(deps.storage)?,
        }),
        QueryMsg::SentMessage { nonce } => to_binary(&MESSAGES.load(deps.storage, nonce)?),
        QueryMsg::MessageNonce {} => to_binary(&NEXT_NONCE.load(deps.storage)?),
    }
}
