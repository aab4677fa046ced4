use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, QuerierWrapper, Response,
    StdError, StdResult,
};
use cw_storage_plus::Item;
use utils::observer::{CapabilitiesResponse, ObserverExecuteMsg, TokenRebaseReport};

const BEHAVIOUR: Item<Behaviour> = Item::new("behaviour");
const PUSHES: Item<Vec<TokenRebaseReport>> = Item::new("pushes");

#[cw_serde]
pub enum Behaviour {
    /// Accepts and records every push
    Record,
    /// Rejects every push with an error
    Fail,
    /// Fails every push the way a sub message that hit its gas limit does
    RunOutOfGas,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub behaviour: Behaviour,
}

// Superset of `utils::observer::ObserverQueryMsg`.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CapabilitiesResponse)]
    Capabilities {},
    #[returns(Vec<TokenRebaseReport>)]
    Pushes {},
    #[returns(Behaviour)]
    Behaviour {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    BEHAVIOUR.save(deps.storage, &msg.behaviour)?;
    PUSHES.save(deps.storage, &vec![])?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ObserverExecuteMsg,
) -> StdResult<Response> {
    let ObserverExecuteMsg::PushTokenRate { report } = msg;
    match BEHAVIOUR.load(deps.storage)? {
        Behaviour::Record => {
            PUSHES.update(deps.storage, |mut pushes| -> StdResult<_> {
                pushes.push(report);
                Ok(pushes)
            })?;
            Ok(Response::new())
        }
        Behaviour::Fail => Err(StdError::generic_err("token rate push rejected")),
        Behaviour::RunOutOfGas => Err(StdError::generic_err("out of gas")),
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Capabilities {} => to_binary(&CapabilitiesResponse {
            push_token_rate: true,
        }),
        QueryMsg::Pushes {} => to_binary(&PUSHES.load(deps.storage)?),
        QueryMsg::Behaviour {} => to_binary(&BEHAVIOUR.load(deps.storage)?),
    }
}

/// Error string the chain hands to `reply` after a failed push to `observer`. wasmd redacts
/// the cause down to its ABCI code, multi-test passes its whole error context instead.
pub fn redacted_push_error(querier: &QuerierWrapper, observer: &Addr) -> String {
    let behaviour = querier.query_wasm_smart::<Behaviour>(observer, &QueryMsg::Behaviour {});
    match behaviour {
        // sdk ErrOutOfGas
        Ok(Behaviour::RunOutOfGas) => "codespace: sdk, code: 11".to_owned(),
        // wasm ErrExecuteFailed
        _ => "codespace: wasm, code: 5".to_owned(),
    }
}
