use soroban_sdk::{contracttype, Address, String};

/// A governance proposal
///
/// Voter membership lives in separate storage entries keyed by
/// `(id, voter)`; `voter_count` is the size of that set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub active: bool,
    pub vote_count: u128,
    pub voter_count: u32,
}

/// Registry configuration, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingConfig {
    /// Verifier contract consulted for every vote
    pub authorization_contract: Address,
    /// Oldest accepted authorization, in seconds; zero disables the check
    pub max_authorization_age: u64,
}
