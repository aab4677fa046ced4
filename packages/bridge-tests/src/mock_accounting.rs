use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw_storage_plus::Item;
use utils::accounting::{AccountingOracleQueryMsg, ChainConfigResponse};

const CHAIN_CONFIG: Item<ChainConfigResponse> = Item::new("chain_config");
const LAST_PROCESSING_REF_SLOT: Item<u64> = Item::new("last_processing_ref_slot");

#[cw_serde]
pub struct InstantiateMsg {
    pub genesis_time: u64,
    pub seconds_per_slot: u64,
    pub last_processing_ref_slot: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetLastProcessingRefSlot { ref_slot: u64 },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    CHAIN_CONFIG.save(
        deps.storage,
        &ChainConfigResponse {
            slots_per_epoch: 32,
            seconds_per_slot: msg.seconds_per_slot,
            genesis_time: msg.genesis_time,
        },
    )?;
    LAST_PROCESSING_REF_SLOT.save(deps.storage, &msg.last_processing_ref_slot)?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetLastProcessingRefSlot { ref_slot } => {
            LAST_PROCESSING_REF_SLOT.save(deps.storage, &ref_slot)?;
        }
    }
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: AccountingOracleQueryMsg) -> StdResult<Binary> {
    match msg {
        AccountingOracleQueryMsg::ChainConfig {} => to_binary(&CHAIN_CONFIG.load(deps.storage)?),
        AccountingOracleQueryMsg::LastProcessingRefSlot {} => {
            to_binary(&LAST_PROCESSING_REF_SLOT.load(deps.storage)?)
        }
    }
}
