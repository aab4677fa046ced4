mod access;
pub mod contract;
mod error;
mod events;
pub mod msg;
pub mod state;


pub use crate::access::Role;
pub use crate::error::ContractError;
