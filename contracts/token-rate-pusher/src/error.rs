use cosmwasm_std::StdError;
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

    #[error("Token rate can't be computed without any shares")]
    ZeroTotalShares {},

    #[error("Timestamp of ref slot {ref_slot} overflows")]
    RefSlotOutOfRange { ref_slot: u64 },
}
