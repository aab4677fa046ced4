use cosmwasm_std::{from_binary, Addr, Event, Uint128};

use bridge_tests::builder::{GENESIS_TIME, SECONDS_PER_SLOT};
use utils::observer::TokenRebaseReport;
use utils::rate::RateReceiverExecuteMsg;

use super::suite::{SuiteBuilder, L2_GAS_LIMIT, NOTIFIER, ORACLE};
use crate::ContractError;

fn report() -> TokenRebaseReport {
    TokenRebaseReport {
        report_timestamp: 1_700_000_000,
        time_elapsed: 86_400,
        pre_total_shares: Uint128::new(7_975_822_843_597_609_202_337_218),
        pre_total_ether: Uint128::new(9_309_904_612_343_950_493_629_678),
        post_total_shares: Uint128::new(7_975_822_843_597_609_202_337_218),
        post_total_ether: Uint128::new(9_309_904_612_343_950_493_629_678),
        shares_minted_as_fees: Uint128::zero(),
    }
}

#[test]
fn chain_config_is_cached() {
    let suite = SuiteBuilder::new().build();

    let config = suite.query_config().unwrap();
    assert_eq!(config.notifier, Addr::unchecked(NOTIFIER));
    assert_eq!(config.messenger, suite.bridge.messenger);
    assert_eq!(config.token_rate_oracle, Addr::unchecked(ORACLE));
    assert_eq!(config.accounting_oracle, suite.bridge.accounting_oracle);
    assert_eq!(config.l2_gas_limit_for_pushing_token_rate, L2_GAS_LIMIT);
    assert_eq!(config.chain_config.genesis_time, GENESIS_TIME);
    assert_eq!(config.chain_config.seconds_per_slot, SECONDS_PER_SLOT);

    assert!(suite.query_capabilities().unwrap().push_token_rate);
}

#[test]
fn only_notifier_pushes() {
    let mut suite = SuiteBuilder::new().build();

    let err = suite.push_token_rate("stranger", report()).unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());
    assert_eq!(suite.bridge.query_message_nonce(&suite.app).unwrap(), 0);
}

#[test]
fn zero_total_shares() {
    let mut suite = SuiteBuilder::new().build();

    let report = TokenRebaseReport {
        post_total_shares: Uint128::zero(),
        ..report()
    };
    let err = suite.push_token_rate(NOTIFIER, report).unwrap_err();
    assert_eq!(ContractError::ZeroTotalShares {}, err.downcast().unwrap());
}

#[test]
fn push_sends_single_message() {
    let mut suite = SuiteBuilder::new().build();
    let expected_rate = Uint128::new(1_167_265_722_284_346_098_836_708_238);

    let response = suite.push_token_rate(NOTIFIER, report()).unwrap();
    assert!(response.has_event(
        &Event::new("wasm-sent_message")
            .add_attribute("target", ORACLE)
            .add_attribute("sender", suite.pusher.as_str())
            .add_attribute("nonce", "0")
            .add_attribute("min_gas_limit", L2_GAS_LIMIT.to_string())
    ));
    assert_eq!(suite.bridge.query_message_nonce(&suite.app).unwrap(), 1);

    let sent = suite.bridge.query_sent_message(&suite.app, 0).unwrap();
    assert_eq!(sent.sender, suite.pusher);
    assert_eq!(sent.target, Addr::unchecked(ORACLE));
    assert_eq!(sent.min_gas_limit, L2_GAS_LIMIT);
    assert_eq!(
        from_binary::<RateReceiverExecuteMsg>(&sent.message).unwrap(),
        RateReceiverExecuteMsg::UpdateRate {
            token_rate: expected_rate,
            rate_timestamp: suite.report_timestamp,
        }
    );
}

#[test]
fn timestamp_follows_accounting_reports() {
    let mut suite = SuiteBuilder::new().build();

    let ref_slot = 7_300_000;
    suite
        .bridge
        .set_last_processing_ref_slot(&mut suite.app, ref_slot)
        .unwrap();
    suite.push_token_rate(NOTIFIER, report()).unwrap();

    let sent = suite.bridge.query_sent_message(&suite.app, 0).unwrap();
    let RateReceiverExecuteMsg::UpdateRate { rate_timestamp, .. } =
        from_binary(&sent.message).unwrap();
    assert_eq!(rate_timestamp, GENESIS_TIME + SECONDS_PER_SLOT * ref_slot);
    assert_eq!(rate_timestamp, suite.bridge.slot_timestamp(ref_slot));
}

#[test]
fn ref_slot_past_representable_time() {
    let mut suite = SuiteBuilder::new().build();

    suite
        .bridge
        .set_last_processing_ref_slot(&mut suite.app, u64::MAX / SECONDS_PER_SLOT + 1)
        .unwrap();
    let err = suite.push_token_rate(NOTIFIER, report()).unwrap_err();
    assert_eq!(
        ContractError::RefSlotOutOfRange {
            ref_slot: u64::MAX / SECONDS_PER_SLOT + 1
        },
        err.downcast().unwrap()
    );
    assert_eq!(suite.bridge.query_message_nonce(&suite.app).unwrap(), 0);
}
