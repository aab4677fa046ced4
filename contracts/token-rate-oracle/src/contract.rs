#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure_eq, to_binary, Addr, Api, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, Uint256,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use utils::rate::{deviation_bp, elapsed_days_ceil, BASIS_POINT_SCALE, RATE_DECIMALS};

use crate::access::{ensure_role, grant_role, has_role, revoke_role, Role};
use crate::error::ContractError;
use crate::events;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RoundDataResponse, SaneRangeResponse};
use crate::state::{Config, Lifecycle, RateRecord, CONFIG, HISTORY, LIFECYCLE, PAUSED};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:token-rate-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 0.01 with 27 decimals
pub const MIN_SANE_TOKEN_RATE: u128 = 10u128.pow(RATE_DECIMALS as u32 - 2);
/// 100 with 27 decimals
pub const MAX_SANE_TOKEN_RATE: u128 = 10u128.pow(RATE_DECIMALS as u32 + 2);

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_deviation_bp_per_day > BASIS_POINT_SCALE as u64 {
        return Err(ContractError::MaxDeviationOutOfRange {});
    }

    let cfg = Config {
        messenger: validate_addr(deps.api, &msg.messenger, ContractError::ZeroAddressMessenger {})?,
        bridge: validate_addr(deps.api, &msg.bridge, ContractError::ZeroAddressBridge {})?,
        token_rate_pusher: validate_addr(
            deps.api,
            &msg.token_rate_pusher,
            ContractError::ZeroAddressPusher {},
        )?,
        token_rate_outdated_delay: msg.token_rate_outdated_delay,
        max_allowed_clock_lag: msg.max_allowed_clock_lag,
        max_deviation_bp_per_day: msg.max_deviation_bp_per_day,
        oldest_rate_allowed_in_pause_span: msg.oldest_rate_allowed_in_pause_span,
        min_time_between_updates: msg.min_time_between_updates,
        deployer: info.sender.clone(),
    };
    CONFIG.save(deps.storage, &cfg)?;

    let lifecycle = if msg.petrified {
        Lifecycle::Petrified
    } else {
        Lifecycle::Uninitialized
    };
    LIFECYCLE.save(deps.storage, &lifecycle)?;
    PAUSED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("petrified", msg.petrified.to_string()))
}

fn validate_addr(
    api: &dyn Api,
    addr: &str,
    on_empty: ContractError,
) -> Result<Addr, ContractError> {
    if addr.is_empty() {
        return Err(on_empty);
    }
    Ok(api.addr_validate(addr)?)
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
        Initialize {
            admin,
            token_rate,
            rate_timestamp,
        } => execute::initialize(deps, env, info, admin, token_rate, rate_timestamp),
        UpdateRate {
            token_rate,
            rate_timestamp,
        } => execute::update_rate(deps, env, info, token_rate, rate_timestamp),
        PauseTokenRateUpdates { index } => restricted::pause(deps, env, info, index),
        ResumeTokenRateUpdates {
            token_rate,
            rate_timestamp,
        } => restricted::resume(deps, env, info, token_rate, rate_timestamp),
        GrantRole { role, account } => restricted::grant(deps, info, role, account),
        RevokeRole { role, account } => restricted::revoke(deps, info, role, account),
    }
}

fn ensure_initialized(deps: Deps) -> Result<(), ContractError> {
    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Initialized => Ok(()),
        _ => Err(ContractError::NotInitialized {}),
    }
}

fn ensure_sane(rate: Uint128) -> Result<(), ContractError> {
    if rate < Uint128::new(MIN_SANE_TOKEN_RATE) || rate > Uint128::new(MAX_SANE_TOKEN_RATE) {
        return Err(ContractError::OutOfSaneRange { rate });
    }
    Ok(())
}

fn ensure_within_clock_lag(
    cfg: &Config,
    now: u64,
    rate: Uint128,
    rate_timestamp: u64,
) -> Result<(), ContractError> {
    if rate_timestamp > now.saturating_add(cfg.max_allowed_clock_lag) {
        return Err(ContractError::ClockLagExceeded {
            rate,
            timestamp: rate_timestamp,
        });
    }
    Ok(())
}

mod execute {
    use utils::messenger::{CrossDomainMessageSenderResponse, MessengerQueryMsg};

    use super::*;

    pub fn initialize(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        admin: String,
        token_rate: Uint128,
        rate_timestamp: u64,
    ) -> Result<Response, ContractError> {
        if LIFECYCLE.load(deps.storage)? != Lifecycle::Uninitialized {
            return Err(ContractError::AlreadyInitialized {});
        }
        let cfg = CONFIG.load(deps.storage)?;
        ensure_eq!(info.sender, cfg.deployer, ContractError::Unauthorized {});

        let now = env.block.time.seconds();
        ensure_sane(token_rate)?;
        ensure_within_clock_lag(&cfg, now, token_rate, rate_timestamp)?;

        let admin = deps.api.addr_validate(&admin)?;
        grant_role(deps.storage, Role::Admin, &admin)?;

        HISTORY.push(
            deps.storage,
            &RateRecord {
                rate: token_rate,
                origin_timestamp: rate_timestamp,
                received_timestamp: now,
            },
        )?;
        LIFECYCLE.save(deps.storage, &Lifecycle::Initialized)?;

        Ok(Response::new()
            .add_attribute("action", "initialize")
            .add_attribute("admin", &admin)
            .add_attribute("token_rate", token_rate)
            .add_attribute("rate_timestamp", rate_timestamp.to_string())
            .add_event(events::role_granted(Role::Admin, &admin, &info.sender)))
    }

    /// The bridge is trusted as is. The messenger is trusted only while it relays a message
    /// originally sent by the token rate pusher.
    fn ensure_bridge_or_pusher(
        deps: Deps,
        cfg: &Config,
        sender: &Addr,
    ) -> Result<(), ContractError> {
        if *sender == cfg.bridge {
            return Ok(());
        }
        if *sender == cfg.messenger {
            let response: CrossDomainMessageSenderResponse = deps.querier.query_wasm_smart(
                &cfg.messenger,
                &MessengerQueryMsg::CrossDomainMessageSender {},
            )?;
            if response.sender.as_ref() == Some(&cfg.token_rate_pusher) {
                return Ok(());
            }
        }
        Err(ContractError::Unauthorized {})
    }

    /// Messages may arrive late, out of order or more than once. Those that don't carry
    /// anything newer than the current token rate only emit an event.
    pub fn update_rate(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        token_rate: Uint128,
        rate_timestamp: u64,
    ) -> Result<Response, ContractError> {
        ensure_initialized(deps.as_ref())?;
        let cfg = CONFIG.load(deps.storage)?;
        ensure_bridge_or_pusher(deps.as_ref(), &cfg, &info.sender)?;

        let mut response = Response::new()
            .add_attribute("action", "update_rate")
            .add_attribute("sender", info.sender);

        if PAUSED.load(deps.storage)? {
            return Ok(
                response.add_event(events::update_attempt_during_pause(token_rate, rate_timestamp))
            );
        }

        let now = env.block.time.seconds();
        let mut current = HISTORY.last(deps.storage)?;

        if rate_timestamp < current.origin_timestamp {
            return Ok(response.add_event(events::dormant_update_ignored(
                rate_timestamp,
                current.origin_timestamp,
            )));
        }

        if rate_timestamp == current.origin_timestamp {
            current.received_timestamp = now;
            HISTORY.replace_last(deps.storage, &current)?;
            return Ok(response.add_event(events::received_timestamp_updated(now)));
        }

        if rate_timestamp - current.origin_timestamp < cfg.min_time_between_updates {
            return Ok(response.add_event(events::update_too_often(
                rate_timestamp,
                current.origin_timestamp,
            )));
        }

        ensure_within_clock_lag(&cfg, now, token_rate, rate_timestamp)?;
        if rate_timestamp > now {
            // clocks of both chains are allowed to drift apart
            response = response.add_event(events::timestamp_in_future(token_rate, rate_timestamp));
        }

        ensure_sane(token_rate)?;

        let days = elapsed_days_ceil(current.origin_timestamp, rate_timestamp);
        let allowed_deviation = u128::from(cfg.max_deviation_bp_per_day) * u128::from(days);
        if deviation_bp(current.rate, token_rate)? > Uint256::from(allowed_deviation) {
            return Err(ContractError::OutOfRange {
                rate: token_rate,
                timestamp: rate_timestamp,
            });
        }

        HISTORY.push(
            deps.storage,
            &RateRecord {
                rate: token_rate,
                origin_timestamp: rate_timestamp,
                received_timestamp: now,
            },
        )?;

        Ok(response.add_event(events::rate_updated(token_rate, rate_timestamp)))
    }
}

mod restricted {
    use super::*;

    pub fn pause(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        index: u64,
    ) -> Result<Response, ContractError> {
        ensure_role(deps.storage, Role::RateUpdateDisabler, &info.sender)?;
        ensure_initialized(deps.as_ref())?;
        if PAUSED.load(deps.storage)? {
            return Err(ContractError::AlreadyPaused {});
        }

        let cfg = CONFIG.load(deps.storage)?;
        let anchor = HISTORY
            .get(deps.storage, index)?
            .ok_or(ContractError::InvalidIndex { index })?;
        let age = env
            .block
            .time
            .seconds()
            .saturating_sub(anchor.received_timestamp);
        if age > cfg.oldest_rate_allowed_in_pause_span {
            return Err(ContractError::UpdateTooOld {});
        }

        // everything newer than the anchor is no longer trusted
        HISTORY.truncate(deps.storage, index + 1)?;
        PAUSED.save(deps.storage, &true)?;

        Ok(Response::new()
            .add_attribute("action", "pause_token_rate_updates")
            .add_attribute("sender", info.sender)
            .add_attribute("index", index.to_string())
            .add_event(events::updates_paused(anchor.rate, anchor.origin_timestamp)))
    }

    pub fn resume(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        token_rate: Uint128,
        rate_timestamp: u64,
    ) -> Result<Response, ContractError> {
        ensure_role(deps.storage, Role::RateUpdateEnabler, &info.sender)?;
        ensure_initialized(deps.as_ref())?;
        if !PAUSED.load(deps.storage)? {
            return Err(ContractError::AlreadyResumed {});
        }

        let cfg = CONFIG.load(deps.storage)?;
        let now = env.block.time.seconds();
        ensure_sane(token_rate)?;
        ensure_within_clock_lag(&cfg, now, token_rate, rate_timestamp)?;

        let current = HISTORY.last(deps.storage)?;
        if rate_timestamp < current.origin_timestamp {
            return Err(ContractError::TimestampOlderThanPrevious {
                timestamp: rate_timestamp,
            });
        }

        HISTORY.push(
            deps.storage,
            &RateRecord {
                rate: token_rate,
                origin_timestamp: rate_timestamp,
                received_timestamp: now,
            },
        )?;
        PAUSED.save(deps.storage, &false)?;

        Ok(Response::new()
            .add_attribute("action", "resume_token_rate_updates")
            .add_attribute("sender", info.sender)
            .add_event(events::updates_resumed(token_rate, rate_timestamp))
            .add_event(events::rate_updated(token_rate, rate_timestamp)))
    }

    pub fn grant(
        deps: DepsMut,
        info: MessageInfo,
        role: Role,
        account: String,
    ) -> Result<Response, ContractError> {
        ensure_role(deps.storage, Role::Admin, &info.sender)?;
        let account = deps.api.addr_validate(&account)?;

        let mut response = Response::new().add_attribute("action", "grant_role");
        if grant_role(deps.storage, role, &account)? {
            response = response.add_event(events::role_granted(role, &account, &info.sender));
        }
        Ok(response)
    }

    pub fn revoke(
        deps: DepsMut,
        info: MessageInfo,
        role: Role,
        account: String,
    ) -> Result<Response, ContractError> {
        ensure_role(deps.storage, Role::Admin, &info.sender)?;
        let account = deps.api.addr_validate(&account)?;

        let mut response = Response::new().add_attribute("action", "revoke_role");
        if revoke_role(deps.storage, role, &account) {
            response = response.add_event(events::role_revoked(role, &account, &info.sender));
        }
        Ok(response)
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::ContractState {} => to_binary(&LIFECYCLE.load(deps.storage)?),
        QueryMsg::CurrentRate {} => to_binary(&HISTORY.last(deps.storage)?),
        QueryMsg::LatestRoundData {} => {
            to_binary(&RoundDataResponse::from(HISTORY.last(deps.storage)?))
        }
        QueryMsg::LatestAnswer {} => to_binary(&HISTORY.last(deps.storage)?.rate),
        QueryMsg::Decimals {} => to_binary(&RATE_DECIMALS),
        QueryMsg::SaneRange {} => to_binary(&SaneRangeResponse {
            min: Uint128::new(MIN_SANE_TOKEN_RATE),
            max: Uint128::new(MAX_SANE_TOKEN_RATE),
        }),
        QueryMsg::TokenRatesLength {} => to_binary(&HISTORY.len(deps.storage)?),
        QueryMsg::TokenRateByIndex { index } => {
            to_binary(&query::token_rate_by_index(deps, index)?)
        }
        QueryMsg::IsPaused {} => to_binary(&PAUSED.load(deps.storage)?),
        QueryMsg::IsLikelyOutdated {} => to_binary(&query::is_likely_outdated(deps, env)?),
        QueryMsg::HasRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            to_binary(&has_role(deps.storage, role, &account))
        }
    }
}

mod query {
    use cosmwasm_std::StdError;

    use super::*;

    pub fn token_rate_by_index(deps: Deps, index: u64) -> StdResult<RateRecord> {
        HISTORY
            .get(deps.storage, index)?
            .ok_or_else(|| {
                StdError::generic_err(format!("There is no token rate with index {}", index))
            })
    }

    pub fn is_likely_outdated(deps: Deps, env: Env) -> StdResult<bool> {
        let cfg = CONFIG.load(deps.storage)?;
        let current = HISTORY.last(deps.storage)?;
        let deadline = current
            .received_timestamp
            .saturating_add(cfg.token_rate_outdated_delay);
        Ok(env.block.time.seconds() > deadline || PAUSED.load(deps.storage)?)
    }
}
