//! Common error type for the DAO voting contracts
//!
//! Both the authorization verifier and the voting engine return this enum so
//! that clients see one consistent set of error codes.

use soroban_sdk::contracterror;

/// Error codes shared by every contract in the workspace
///
/// Error ranges are organized by category:
/// - 1-9: General/ownership errors
/// - 10-19: Proposal and voting errors
/// - 20-29: Signed authorization errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General Errors (1-9) =====
    /// Administrative operation invoked by someone other than the owner
    NotOwner = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Arithmetic overflow occurred
    Overflow = 4,

    /// Proposal title exceeds the allowed length
    TitleTooLong = 5,

    // ===== Governance Errors (10-19) =====
    /// Referenced proposal id does not exist
    ProposalNotFound = 10,

    /// Vote attempted on a proposal that is not active
    ProposalInactive = 11,

    /// Voter already recorded for this proposal
    AlreadyVoted = 12,

    // ===== Authorization Errors (20-29) =====
    /// Signature does not verify against the authorized signer
    InvalidAuthorization = 20,

    /// Authorization timestamp is outside the accepted age window
    AuthorizationExpired = 21,
}
