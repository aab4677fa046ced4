use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// Privileges that can be granted to accounts.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    /// Grants and revokes roles
    Admin,
    /// May pause token rate updates
    RateUpdateDisabler,
    /// May resume token rate updates
    RateUpdateEnabler,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::RateUpdateDisabler => "rate_update_disabler",
            Role::RateUpdateEnabler => "rate_update_enabler",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of (role, account) pairs.
const ROLES: Map<(&str, &Addr), Empty> = Map::new("roles");

pub fn has_role(storage: &dyn Storage, role: Role, account: &Addr) -> bool {
    ROLES.has(storage, (role.as_str(), account))
}

pub fn ensure_role(storage: &dyn Storage, role: Role, account: &Addr) -> Result<(), ContractError> {
    if !has_role(storage, role, account) {
        return Err(ContractError::MissingRole {
            account: account.to_string(),
            role,
        });
    }
    Ok(())
}

/// Returns `false` if the account already had the role.
pub fn grant_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> StdResult<bool> {
    if has_role(storage, role, account) {
        return Ok(false);
    }
    ROLES.save(storage, (role.as_str(), account), &Empty {})?;
    Ok(true)
}

/// Returns `false` if the account didn't have the role.
pub fn revoke_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> bool {
    if !has_role(storage, role, account) {
        return false;
    }
    ROLES.remove(storage, (role.as_str(), account));
    true
}
