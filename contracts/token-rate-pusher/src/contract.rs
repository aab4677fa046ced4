#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use utils::accounting::{AccountingOracleQueryMsg, ChainConfigResponse};
use utils::messenger::MessengerExecuteMsg;
use utils::observer::{CapabilitiesResponse, TokenRebaseReport};
use utils::rate::{token_rate_from_totals, RateReceiverExecuteMsg};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:token-rate-pusher";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let accounting_oracle = deps.api.addr_validate(&msg.accounting_oracle)?;
    // chain config is fixed for the life of the accounting oracle, read once
    let chain_config: ChainConfigResponse = deps
        .querier
        .query_wasm_smart(&accounting_oracle, &AccountingOracleQueryMsg::ChainConfig {})?;

    let cfg = Config {
        notifier: deps.api.addr_validate(&msg.notifier)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        token_rate_oracle: deps.api.addr_validate(&msg.token_rate_oracle)?,
        accounting_oracle,
        l2_gas_limit_for_pushing_token_rate: msg.l2_gas_limit_for_pushing_token_rate,
        chain_config,
    };
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token_rate_oracle", cfg.token_rate_oracle))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    match msg {
        ExecuteMsg::PushTokenRate { report } => execute::push_token_rate(deps, env, info, report),
    }
}

mod execute {
    use super::*;

    /// Start of the ref slot of the last accounting report, which is when the reported
    /// totals were observed.
    fn rate_timestamp(deps: Deps, cfg: &Config) -> Result<u64, ContractError> {
        let ref_slot: u64 = deps.querier.query_wasm_smart(
            &cfg.accounting_oracle,
            &AccountingOracleQueryMsg::LastProcessingRefSlot {},
        )?;
        cfg.chain_config
            .slot_timestamp(ref_slot)
            .ok_or(ContractError::RefSlotOutOfRange { ref_slot })
    }

    pub fn push_token_rate(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        report: TokenRebaseReport,
    ) -> Result<Response, ContractError> {
        let cfg = CONFIG.load(deps.storage)?;
        if info.sender != cfg.notifier {
            return Err(ContractError::Unauthorized {});
        }
        if report.post_total_shares.is_zero() {
            return Err(ContractError::ZeroTotalShares {});
        }

        let token_rate = token_rate_from_totals(report.post_total_ether, report.post_total_shares)?;
        let rate_timestamp = rate_timestamp(deps.as_ref(), &cfg)?;

        let update = RateReceiverExecuteMsg::UpdateRate {
            token_rate,
            rate_timestamp,
        };
        let send = WasmMsg::Execute {
            contract_addr: cfg.messenger.to_string(),
            msg: to_binary(&MessengerExecuteMsg::SendMessage {
                target: cfg.token_rate_oracle.to_string(),
                message: to_binary(&update)?,
                min_gas_limit: cfg.l2_gas_limit_for_pushing_token_rate,
            })?,
            funds: vec![],
        };

        Ok(Response::new()
            .add_attribute("action", "push_token_rate")
            .add_attribute("token_rate", token_rate)
            .add_attribute("rate_timestamp", rate_timestamp.to_string())
            .add_message(send))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Capabilities {} => to_binary(&CapabilitiesResponse {
            push_token_rate: true,
        }),
    }
}
