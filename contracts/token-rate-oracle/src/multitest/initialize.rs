use cosmwasm_std::{Addr, Uint128};

use super::suite::{
    wasm_event, SuiteBuilder, ADMIN, BRIDGE, DAY, HOUR, OWNER, PUSHER, STRANGER, TOKEN_RATE,
};
use crate::contract::{MAX_SANE_TOKEN_RATE, MIN_SANE_TOKEN_RATE};
use crate::state::Lifecycle;
use crate::{ContractError, Role};

#[test]
fn empty_addresses_are_rejected() {
    let mut suite = SuiteBuilder::new().build();
    let messenger = suite.bridge.messenger.clone();
    let valid = SuiteBuilder::new().instantiate_msg(&messenger);

    let mut msg = valid.clone();
    msg.messenger = String::new();
    let err = suite.instantiate(OWNER, &msg).unwrap_err();
    assert_eq!(ContractError::ZeroAddressMessenger {}, err.downcast().unwrap());

    let mut msg = valid.clone();
    msg.bridge = String::new();
    let err = suite.instantiate(OWNER, &msg).unwrap_err();
    assert_eq!(ContractError::ZeroAddressBridge {}, err.downcast().unwrap());

    let mut msg = valid.clone();
    msg.token_rate_pusher = String::new();
    let err = suite.instantiate(OWNER, &msg).unwrap_err();
    assert_eq!(ContractError::ZeroAddressPusher {}, err.downcast().unwrap());

    suite.instantiate(OWNER, &valid).unwrap();
}

#[test]
fn max_deviation_is_bounded() {
    let mut suite = SuiteBuilder::new().build();
    let messenger = suite.bridge.messenger.clone();

    let msg = SuiteBuilder::new()
        .with_max_deviation_bp_per_day(10_001)
        .instantiate_msg(&messenger);
    let err = suite.instantiate(OWNER, &msg).unwrap_err();
    assert_eq!(ContractError::MaxDeviationOutOfRange {}, err.downcast().unwrap());

    let msg = SuiteBuilder::new()
        .with_max_deviation_bp_per_day(10_000)
        .instantiate_msg(&messenger);
    suite.instantiate(OWNER, &msg).unwrap();
}

#[test]
fn state_after_initialization() {
    let suite = SuiteBuilder::new().build();

    let config = suite.query_config().unwrap();
    assert_eq!(config.messenger, suite.bridge.messenger);
    assert_eq!(config.bridge, Addr::unchecked(BRIDGE));
    assert_eq!(config.token_rate_pusher, Addr::unchecked(PUSHER));
    assert_eq!(config.token_rate_outdated_delay, DAY);
    assert_eq!(config.max_allowed_clock_lag, 2 * DAY);
    assert_eq!(config.max_deviation_bp_per_day, 500);
    assert_eq!(config.oldest_rate_allowed_in_pause_span, 3 * DAY);
    assert_eq!(config.min_time_between_updates, HOUR);
    assert_eq!(config.deployer, Addr::unchecked(OWNER));

    assert_eq!(suite.query_contract_state().unwrap(), Lifecycle::Initialized);
    assert_eq!(suite.query_token_rates_length().unwrap(), 1);
    assert!(!suite.query_is_paused().unwrap());
    assert!(!suite.query_is_likely_outdated().unwrap());
    assert!(suite.query_has_role(Role::Admin, ADMIN).unwrap());
    assert!(!suite.query_has_role(Role::Admin, OWNER).unwrap());

    let current = suite.query_current_rate().unwrap();
    assert_eq!(current.rate, Uint128::new(TOKEN_RATE));
    assert_eq!(current.origin_timestamp, suite.seed_timestamp);
    assert_eq!(current.received_timestamp, suite.now());
}

#[test]
fn petrified_instance_cannot_be_initialized() {
    let mut suite = SuiteBuilder::new().petrified().build();
    assert_eq!(suite.query_contract_state().unwrap(), Lifecycle::Petrified);

    let now = suite.now();
    let err = suite.initialize(OWNER, ADMIN, TOKEN_RATE, now).unwrap_err();
    assert_eq!(ContractError::AlreadyInitialized {}, err.downcast().unwrap());
    assert_eq!(suite.query_token_rates_length().unwrap(), 0);
}

#[test]
fn initialize_only_once() {
    let mut suite = SuiteBuilder::new().build();

    let now = suite.now();
    let err = suite.initialize(OWNER, ADMIN, TOKEN_RATE, now).unwrap_err();
    assert_eq!(ContractError::AlreadyInitialized {}, err.downcast().unwrap());
}

#[test]
fn only_deployer_initializes() {
    let mut suite = SuiteBuilder::new().uninitialized().build();

    let now = suite.now();
    let err = suite
        .initialize(STRANGER, STRANGER, TOKEN_RATE, now)
        .unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());

    let response = suite.initialize(OWNER, ADMIN, TOKEN_RATE, now).unwrap();
    assert!(response.has_event(
        &wasm_event("role_granted")
            .add_attribute("role", "admin")
            .add_attribute("account", ADMIN)
    ));
    assert_eq!(suite.query_contract_state().unwrap(), Lifecycle::Initialized);
}

#[test]
fn initial_token_rate_has_to_be_sane() {
    let mut suite = SuiteBuilder::new().uninitialized().build();
    let now = suite.now();

    for rate in [MIN_SANE_TOKEN_RATE - 1, MAX_SANE_TOKEN_RATE + 1] {
        let err = suite.initialize(OWNER, ADMIN, rate, now).unwrap_err();
        assert_eq!(
            ContractError::OutOfSaneRange {
                rate: Uint128::new(rate)
            },
            err.downcast().unwrap()
        );
    }

    suite
        .initialize(OWNER, ADMIN, MAX_SANE_TOKEN_RATE, now)
        .unwrap();
}

#[test]
fn initial_timestamp_respects_clock_lag() {
    let mut suite = SuiteBuilder::new().uninitialized().build();
    let exceeded = suite.now() + 2 * DAY + 1;

    let err = suite
        .initialize(OWNER, ADMIN, TOKEN_RATE, exceeded)
        .unwrap_err();
    assert_eq!(
        ContractError::ClockLagExceeded {
            rate: Uint128::new(TOKEN_RATE),
            timestamp: exceeded,
        },
        err.downcast().unwrap()
    );

    suite
        .initialize(OWNER, ADMIN, TOKEN_RATE, exceeded - 1)
        .unwrap();
}

#[test]
fn updates_before_initialization_fail() {
    let mut suite = SuiteBuilder::new().uninitialized().build();

    let now = suite.now();
    let err = suite.update_rate(BRIDGE, TOKEN_RATE, now).unwrap_err();
    assert_eq!(ContractError::NotInitialized {}, err.downcast().unwrap());
    suite.query_current_rate().unwrap_err();
}
