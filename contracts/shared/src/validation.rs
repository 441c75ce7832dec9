//! Validation helpers shared by the voting contracts
//!
//! Every check here runs before any state mutation, so a failure leaves the
//! ledger untouched.

use crate::constants::MAX_TITLE_LENGTH;
use crate::errors::ContractError;
use soroban_sdk::{Address, String};

// ===== Access Control =====

/// Require that `caller` authorized this invocation and is the `owner`
///
/// # Returns
/// `Ok(())` if the caller is the owner, `Err(ContractError::NotOwner)` otherwise
pub fn require_owner(caller: &Address, owner: &Address) -> Result<(), ContractError> {
    caller.require_auth();

    if caller != owner {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}

// ===== Input Validation =====

/// Validate a proposal title against the length limit
pub fn validate_title(title: &String) -> Result<(), ContractError> {
    if title.len() > MAX_TITLE_LENGTH {
        return Err(ContractError::TitleTooLong);
    }
    Ok(())
}

/// Validate an authorization timestamp against the configured age window
///
/// A `max_age` of zero disables the check. Timestamps ahead of the ledger
/// clock are accepted; only stale authorizations are rejected.
pub fn validate_authorization_age(
    now: u64,
    issued_at: u64,
    max_age: u64,
) -> Result<(), ContractError> {
    if max_age == 0 {
        return Ok(());
    }
    if now.saturating_sub(issued_at) > max_age {
        return Err(ContractError::AuthorizationExpired);
    }
    Ok(())
}

// ===== Safe Math =====

/// Safely add two vote weights, returning error on overflow
pub fn safe_add(a: u128, b: u128) -> Result<u128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}
