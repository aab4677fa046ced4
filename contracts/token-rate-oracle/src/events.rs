use cosmwasm_std::{Addr, Event, Uint128};

use crate::access::Role;

fn with_rate(ty: &str, rate: Uint128, rate_timestamp: u64) -> Event {
    Event::new(ty)
        .add_attribute("rate", rate)
        .add_attribute("rate_timestamp", rate_timestamp.to_string())
}

pub fn rate_updated(rate: Uint128, rate_timestamp: u64) -> Event {
    with_rate("rate_updated", rate, rate_timestamp)
}

pub fn dormant_update_ignored(rate_timestamp: u64, current_rate_timestamp: u64) -> Event {
    Event::new("dormant_token_rate_update_ignored")
        .add_attribute("rate_timestamp", rate_timestamp.to_string())
        .add_attribute("current_rate_timestamp", current_rate_timestamp.to_string())
}

pub fn update_too_often(rate_timestamp: u64, current_rate_timestamp: u64) -> Event {
    Event::new("update_rate_is_too_often")
        .add_attribute("rate_timestamp", rate_timestamp.to_string())
        .add_attribute("current_rate_timestamp", current_rate_timestamp.to_string())
}

pub fn received_timestamp_updated(received_timestamp: u64) -> Event {
    Event::new("rate_received_timestamp_updated")
        .add_attribute("received_timestamp", received_timestamp.to_string())
}

pub fn timestamp_in_future(rate: Uint128, rate_timestamp: u64) -> Event {
    with_rate("token_rate_timestamp_is_in_future", rate, rate_timestamp)
}

pub fn updates_paused(rate: Uint128, rate_timestamp: u64) -> Event {
    with_rate("token_rate_updates_paused", rate, rate_timestamp)
}

pub fn updates_resumed(rate: Uint128, rate_timestamp: u64) -> Event {
    with_rate("token_rate_updates_resumed", rate, rate_timestamp)
}

pub fn update_attempt_during_pause(rate: Uint128, rate_timestamp: u64) -> Event {
    with_rate("token_rate_update_attempt_during_pause", rate, rate_timestamp)
}

pub fn role_granted(role: Role, account: &Addr, sender: &Addr) -> Event {
    Event::new("role_granted")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account)
        .add_attribute("sender", sender)
}

pub fn role_revoked(role: Role, account: &Addr, sender: &Addr) -> Event {
    Event::new("role_revoked")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account)
        .add_attribute("sender", sender)
}
