use cosmwasm_std::{from_binary, Event};

use bridge_tests::mock_observer::Behaviour;
use utils::rate::{token_rate_from_totals, RateReceiverExecuteMsg};

use super::suite::{report, SuiteBuilder, ORACLE, OWNER, REBASE_CALLER, STRANGER};
use crate::ContractError;

#[test]
fn only_rebase_caller_dispatches() {
    let mut suite = SuiteBuilder::new().build();
    let observer = suite.create_observer(Behaviour::Record);
    suite.add_observer(OWNER, observer.as_str()).unwrap();

    for sender in [STRANGER, OWNER] {
        let err = suite
            .handle_post_token_rebase(sender, report())
            .unwrap_err();
        assert_eq!(
            ContractError::UnauthorizedRebaseCaller {},
            err.downcast().unwrap()
        );
    }
    assert!(suite.query_pushes(&observer).unwrap().is_empty());
}

#[test]
fn dispatch_without_observers() {
    let mut suite = SuiteBuilder::new().build();

    suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap();
}

#[test]
fn every_observer_gets_the_report() {
    let mut suite = SuiteBuilder::new().build();
    let first = suite.create_observer(Behaviour::Record);
    let second = suite.create_observer(Behaviour::Record);
    suite.add_observer(OWNER, first.as_str()).unwrap();
    suite.add_observer(OWNER, second.as_str()).unwrap();

    let response = suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap();
    assert!(!response
        .events
        .iter()
        .any(|event| event.ty == "wasm-push_token_rate_failed"));

    assert_eq!(suite.query_pushes(&first).unwrap(), vec![report()]);
    assert_eq!(suite.query_pushes(&second).unwrap(), vec![report()]);
}

#[test]
fn failing_observer_is_isolated() {
    let mut suite = SuiteBuilder::new().build();
    let failing = suite.create_observer(Behaviour::Fail);
    let recording = suite.create_observer(Behaviour::Record);
    suite.add_observer(OWNER, failing.as_str()).unwrap();
    suite.add_observer(OWNER, recording.as_str()).unwrap();

    let response = suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap();
    assert!(response.has_event(
        &Event::new("wasm-push_token_rate_failed").add_attribute("observer", failing.as_str())
    ));
    assert!(!response.has_event(
        &Event::new("wasm-push_token_rate_failed").add_attribute("observer", recording.as_str())
    ));

    assert!(suite.query_pushes(&failing).unwrap().is_empty());
    assert_eq!(suite.query_pushes(&recording).unwrap(), vec![report()]);
}

#[test]
fn observer_out_of_gas_aborts_dispatch() {
    let mut suite = SuiteBuilder::new().build();
    let exhausted = suite.create_observer(Behaviour::RunOutOfGas);
    let recording = suite.create_observer(Behaviour::Record);
    suite.add_observer(OWNER, exhausted.as_str()).unwrap();
    suite.add_observer(OWNER, recording.as_str()).unwrap();

    let err = suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap_err();
    assert_eq!(
        ContractError::ObserverRevertedWithNoData { observer: exhausted },
        err.downcast().unwrap()
    );
    assert!(suite.query_pushes(&recording).unwrap().is_empty());
}

#[test]
fn failure_reason_is_reported() {
    let mut suite = SuiteBuilder::new().build();
    let failing = suite.create_observer(Behaviour::Fail);
    suite.add_observer(OWNER, failing.as_str()).unwrap();

    let response = suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap();
    assert!(response.has_event(
        &Event::new("wasm-push_token_rate_failed")
            .add_attribute("observer", failing.as_str())
            .add_attribute("reason", "codespace: wasm, code: 5")
    ));
}

#[test]
fn pusher_sends_token_rate_to_messenger() {
    let mut suite = SuiteBuilder::new().build();
    let pusher = suite.pusher.clone();
    suite.add_observer(OWNER, pusher.as_str()).unwrap();

    let response = suite
        .handle_post_token_rebase(REBASE_CALLER, report())
        .unwrap();
    assert!(response.has_event(
        &Event::new("wasm-sent_message")
            .add_attribute("target", ORACLE)
            .add_attribute("sender", pusher.as_str())
            .add_attribute("nonce", "0")
    ));

    let sent = suite.bridge.query_sent_message(&suite.app, 0).unwrap();
    assert_eq!(sent.sender, pusher);
    assert_eq!(sent.target.as_str(), ORACLE);
    let expected_rate =
        token_rate_from_totals(report().post_total_ether, report().post_total_shares).unwrap();
    assert_eq!(
        from_binary::<RateReceiverExecuteMsg>(&sent.message).unwrap(),
        RateReceiverExecuteMsg::UpdateRate {
            token_rate: expected_rate,
            rate_timestamp: suite.report_timestamp,
        }
    );
    assert_eq!(
        suite.report_timestamp,
        suite.bridge.genesis_time + suite.bridge.seconds_per_slot * 7_200_000
    );
}
