use cosmwasm_std::{Addr, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Owner address must be provided")]
    ZeroAddressOwner {},

    #[error("Rebase caller address must be provided")]
    ZeroAddressRebaseCaller {},

    #[error("Observer address must be provided")]
    ZeroAddressObserver {},

    #[error("Observer {observer} can't accept token rate pushes")]
    BadObserverInterface { observer: Addr },

    #[error("Can't register more than {max} observers")]
    MaxObserversCountExceeded { max: u64 },

    #[error("Observer {observer} is already registered")]
    ObserverAlreadyAdded { observer: Addr },

    #[error("Observer {observer} is not registered")]
    NoObserverToRemove { observer: Addr },

    #[error("Only the rebase caller can report a token rebase")]
    UnauthorizedRebaseCaller {},

    #[error("Observer {observer} failed without any error data")]
    ObserverRevertedWithNoData { observer: Addr },
}
