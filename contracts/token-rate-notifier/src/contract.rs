#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, ObserversResponse, QueryMsg};
use crate::state::{Config, CONFIG, MAX_OBSERVERS_COUNT, OBSERVERS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:token-rate-notifier";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.owner.is_empty() {
        return Err(ContractError::ZeroAddressOwner {});
    }
    if msg.rebase_caller.is_empty() {
        return Err(ContractError::ZeroAddressRebaseCaller {});
    }

    let cfg = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        rebase_caller: deps.api.addr_validate(&msg.rebase_caller)?,
    };
    CONFIG.save(deps.storage, &cfg)?;
    OBSERVERS.save(deps.storage, &vec![])?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", cfg.owner)
        .add_attribute("rebase_caller", cfg.rebase_caller))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    use ExecuteMsg::*;
    match msg {
        AddObserver { observer } => restricted::add_observer(deps, info, observer),
        RemoveObserver { observer } => restricted::remove_observer(deps, info, observer),
        HandlePostTokenRebase { report } => {
            execute::handle_post_token_rebase(deps, env, info, report)
        }
    }
}

mod execute {
    use cosmwasm_std::{SubMsg, WasmMsg};

    use utils::observer::{ObserverExecuteMsg, TokenRebaseReport};

    use super::*;
    use crate::state::PUSH_TOKEN_RATE_GAS_LIMIT;

    pub fn handle_post_token_rebase(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        report: TokenRebaseReport,
    ) -> Result<Response, ContractError> {
        let cfg = CONFIG.load(deps.storage)?;
        if info.sender != cfg.rebase_caller {
            return Err(ContractError::UnauthorizedRebaseCaller {});
        }

        let observers = OBSERVERS.load(deps.storage)?;
        let msg = to_binary(&ObserverExecuteMsg::PushTokenRate { report })?;
        // reply ids are positions in the list, it can't change before the replies are done
        let pushes = observers.iter().enumerate().map(|(index, observer)| {
            SubMsg::reply_on_error(
                WasmMsg::Execute {
                    contract_addr: observer.to_string(),
                    msg: msg.clone(),
                    funds: vec![],
                },
                index as u64,
            )
            .with_gas_limit(PUSH_TOKEN_RATE_GAS_LIMIT)
        });

        Ok(Response::new()
            .add_attribute("action", "handle_post_token_rebase")
            .add_attribute("observers", observers.len().to_string())
            .add_submessages(pushes))
    }
}

mod restricted {
    use utils::observer::{CapabilitiesResponse, ObserverQueryMsg};

    use super::*;

    fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
        let cfg = CONFIG.load(deps.storage)?;
        if info.sender != cfg.owner {
            return Err(ContractError::Unauthorized {});
        }
        Ok(())
    }

    fn supports_push(deps: Deps, observer: &Addr) -> bool {
        deps.querier
            .query_wasm_smart::<CapabilitiesResponse>(observer, &ObserverQueryMsg::Capabilities {})
            .map(|capabilities| capabilities.push_token_rate)
            .unwrap_or(false)
    }

    pub fn add_observer(
        deps: DepsMut,
        info: MessageInfo,
        observer: String,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;

        if observer.is_empty() {
            return Err(ContractError::ZeroAddressObserver {});
        }
        let observer = deps.api.addr_validate(&observer)?;
        if !supports_push(deps.as_ref(), &observer) {
            return Err(ContractError::BadObserverInterface { observer });
        }

        let mut observers = OBSERVERS.load(deps.storage)?;
        if observers.len() as u64 >= MAX_OBSERVERS_COUNT {
            return Err(ContractError::MaxObserversCountExceeded {
                max: MAX_OBSERVERS_COUNT,
            });
        }
        if observers.contains(&observer) {
            return Err(ContractError::ObserverAlreadyAdded { observer });
        }
        observers.push(observer.clone());
        OBSERVERS.save(deps.storage, &observers)?;

        Ok(Response::new()
            .add_attribute("action", "add_observer")
            .add_event(Event::new("observer_added").add_attribute("observer", observer)))
    }

    pub fn remove_observer(
        deps: DepsMut,
        info: MessageInfo,
        observer: String,
    ) -> Result<Response, ContractError> {
        ensure_owner(deps.as_ref(), &info)?;
        let observer = deps.api.addr_validate(&observer)?;

        let mut observers = OBSERVERS.load(deps.storage)?;
        let index = observers
            .iter()
            .position(|registered| *registered == observer)
            .ok_or_else(|| ContractError::NoObserverToRemove {
                observer: observer.clone(),
            })?;
        observers.swap_remove(index);
        OBSERVERS.save(deps.storage, &observers)?;

        Ok(Response::new()
            .add_attribute("action", "remove_observer")
            .add_event(Event::new("observer_removed").add_attribute("observer", observer)))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    reply::handle_push_response(deps, msg)
}

mod reply {
    use cosmwasm_std::{StdError, SubMsgResult};

    use super::*;

    /// How a single token rate push ended.
    #[derive(Debug, PartialEq)]
    pub enum PushOutcome {
        Delivered,
        FailedWithData(String),
        /// Usually the observer running out of gas. It is indistinguishable from the notifier
        /// itself running out of gas, so the whole report has to fail.
        FailedNoData,
    }

    impl From<SubMsgResult> for PushOutcome {
        fn from(result: SubMsgResult) -> Self {
            match result {
                SubMsgResult::Ok(_) => PushOutcome::Delivered,
                SubMsgResult::Err(reason) if carries_no_data(&reason) => {
                    PushOutcome::FailedNoData
                }
                SubMsgResult::Err(reason) => PushOutcome::FailedWithData(reason),
            }
        }
    }

    /// Redacted form of the sdk `ErrOutOfGas` the chain reports for a sub message that hit
    /// its gas limit.
    const OUT_OF_GAS: &str = "codespace: sdk, code: 11";

    fn carries_no_data(reason: &str) -> bool {
        reason.is_empty()
            || reason.contains(OUT_OF_GAS)
            || reason.to_ascii_lowercase().contains("out of gas")
    }

    pub fn handle_push_response(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
        let observers = OBSERVERS.load(deps.storage)?;
        let observer = usize::try_from(msg.id)
            .ok()
            .and_then(|index| observers.get(index))
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("observer with reply id {}", msg.id)))?;

        match PushOutcome::from(msg.result) {
            PushOutcome::Delivered => Ok(Response::new()),
            PushOutcome::FailedWithData(reason) => Ok(Response::new().add_event(
                Event::new("push_token_rate_failed")
                    .add_attribute("observer", observer)
                    .add_attribute("reason", reason),
            )),
            PushOutcome::FailedNoData => {
                Err(ContractError::ObserverRevertedWithNoData { observer })
            }
        }
    }

}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Observers {} => to_binary(&ObserversResponse {
            observers: OBSERVERS.load(deps.storage)?,
        }),
        QueryMsg::ObserversLength {} => {
            to_binary(&(OBSERVERS.load(deps.storage)?.len() as u64))
        }
        QueryMsg::MaxObserversCount {} => to_binary(&MAX_OBSERVERS_COUNT),
    }
}
