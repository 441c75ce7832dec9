#![no_std]
//! # Shared DAO Voting Library
//!
//! Reusable errors, constants, encodings and validation helpers for the
//! signature-gated voting contracts.
//!
//! ## Modules
//!
//! - `errors` - The error codes returned by every contract
//! - `constants` - Scope tag, limits and ledger TTLs
//! - `codec` - Fixed-width encodings of authorization fields
//! - `validation` - Ownership, input and safe-math helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::codec::encode_proposal_param;
//! use shared::constants::VOTE_SCOPE;
//! ```

pub mod codec;
pub mod constants;
pub mod errors;
pub mod validation;

// Re-export commonly used items
pub use codec::{decode_proposal_param, encode_proposal_param, u256_word};
pub use errors::ContractError;
pub use validation::{
    require_owner, safe_add, validate_authorization_age, validate_title,
};
