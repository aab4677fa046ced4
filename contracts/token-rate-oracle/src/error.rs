use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::access::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Account {account} is missing role {role}")]
    MissingRole { account: String, role: Role },

    #[error("Messenger address must be provided")]
    ZeroAddressMessenger {},

    #[error("Bridge address must be provided")]
    ZeroAddressBridge {},

    #[error("Token rate pusher address must be provided")]
    ZeroAddressPusher {},

    #[error("Max token rate deviation per day can't exceed 10000 bp")]
    MaxDeviationOutOfRange {},

    #[error("Contract is already initialized")]
    AlreadyInitialized {},

    #[error("Contract is not initialized")]
    NotInitialized {},

    #[error("Timestamp {timestamp} of token rate {rate} exceeds the allowed clock lag")]
    ClockLagExceeded { rate: Uint128, timestamp: u64 },

    #[error("Token rate {rate} is out of sane range")]
    OutOfSaneRange { rate: Uint128 },

    #[error("Token rate {rate} with timestamp {timestamp} deviates too much from the current one")]
    OutOfRange { rate: Uint128, timestamp: u64 },

    #[error("Token rate updates are already paused")]
    AlreadyPaused {},

    #[error("Token rate updates are already resumed")]
    AlreadyResumed {},

    #[error("There is no token rate with index {index}")]
    InvalidIndex { index: u64 },

    #[error("Token rate update is too old to pause on")]
    UpdateTooOld {},

    #[error("Timestamp {timestamp} is older than the timestamp of the current token rate")]
    TimestampOlderThanPrevious { timestamp: u64 },
}
