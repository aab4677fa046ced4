use cosmwasm_std::Uint128;

use super::suite::{SuiteBuilder, BRIDGE, DAY, HOUR, TOKEN_RATE};
use crate::contract::{MAX_SANE_TOKEN_RATE, MIN_SANE_TOKEN_RATE};

#[test]
fn decimals_and_sane_range() {
    let suite = SuiteBuilder::new().build();

    assert_eq!(suite.query_decimals().unwrap(), 27);
    let range = suite.query_sane_range().unwrap();
    assert_eq!(range.min, Uint128::new(10u128.pow(25)));
    assert_eq!(range.max, Uint128::new(10u128.pow(29)));
    assert_eq!(range.min, Uint128::new(MIN_SANE_TOKEN_RATE));
    assert_eq!(range.max, Uint128::new(MAX_SANE_TOKEN_RATE));
}

#[test]
fn rate_by_index() {
    let mut suite = SuiteBuilder::new().build();
    let now = suite.now();
    let seed = suite.seed_timestamp;

    suite.advance_seconds(10);
    suite.update_rate(BRIDGE, TOKEN_RATE + 1, now).unwrap();

    let first = suite.query_token_rate_by_index(0).unwrap();
    assert_eq!(first.rate, Uint128::new(TOKEN_RATE));
    assert_eq!(first.origin_timestamp, seed);
    assert_eq!(first.received_timestamp, now);

    let second = suite.query_token_rate_by_index(1).unwrap();
    assert_eq!(second.rate, Uint128::new(TOKEN_RATE + 1));
    assert_eq!(second.origin_timestamp, now);
    assert_eq!(second.received_timestamp, now + 10);

    let err = suite.query_token_rate_by_index(2).unwrap_err();
    assert!(err
        .to_string()
        .contains("There is no token rate with index 2"));
}

#[test]
fn outdated_after_delay() {
    let mut suite = SuiteBuilder::new().build();

    suite.advance_seconds(DAY);
    assert!(!suite.query_is_likely_outdated().unwrap());

    suite.advance_seconds(1);
    assert!(suite.query_is_likely_outdated().unwrap());

    // re-receiving the current rate makes it fresh again
    let seed = suite.seed_timestamp;
    suite.update_rate(BRIDGE, TOKEN_RATE, seed).unwrap();
    assert!(!suite.query_is_likely_outdated().unwrap());
}

#[test]
fn outdated_delay_from_config() {
    let mut suite = SuiteBuilder::new()
        .with_token_rate_outdated_delay(HOUR)
        .build();

    suite.advance_seconds(HOUR + 1);
    assert!(suite.query_is_likely_outdated().unwrap());
}
