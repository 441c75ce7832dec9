//! DAO Voting Contract
//!
//! Owner-managed proposal registry where every vote must carry an
//! authorization signed off-chain by the trusted signer configured on the
//! authorization contract. The signed tuple is
//! `(this contract, voter, amount, "gov:proposal:vote", param, timestamp)`,
//! with `param` the 32-byte left-padded proposal id.
//!
//! A vote is admitted once per voter per proposal and adds `amount` to the
//! proposal's tally. Rejections, in check order: `ProposalNotFound`,
//! `ProposalInactive`, `AlreadyVoted`, `InvalidAuthorization`,
//! `AuthorizationExpired`.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String};

use shared::ContractError;

mod contract;
mod events;
mod storage;
mod types;

use contract::DaoVoting;
pub use types::{Proposal, VotingConfig};

#[contract]
pub struct DaoVotingContract;

#[contractimpl]
impl DaoVotingContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        authorization_contract: Address,
        max_authorization_age: u64,
    ) -> Result<(), ContractError> {
        DaoVoting::initialize(env, owner, authorization_contract, max_authorization_age)
    }

    pub fn create_proposal(
        env: Env,
        caller: Address,
        title: String,
        is_active: bool,
    ) -> Result<u64, ContractError> {
        DaoVoting::create_proposal(env, caller, title, is_active)
    }

    pub fn vote(
        env: Env,
        voter: Address,
        amount: u128,
        param: BytesN<32>,
        timestamp: u64,
        signer: BytesN<20>,
        signature: Bytes,
    ) -> Result<(), ContractError> {
        DaoVoting::vote(env, voter, amount, param, timestamp, signer, signature)
    }

    pub fn proposals(env: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        DaoVoting::get_proposal(&env, proposal_id)
    }

    pub fn num_proposals(env: Env) -> u64 {
        DaoVoting::proposal_count(&env)
    }

    pub fn get_vote_count(env: Env, proposal_id: u64) -> Result<u128, ContractError> {
        DaoVoting::get_vote_count(&env, proposal_id)
    }

    pub fn has_user_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        DaoVoting::has_user_voted(&env, proposal_id, &voter)
    }

    pub fn authorization_contract(env: Env) -> Result<Address, ContractError> {
        DaoVoting::config(&env).map(|config| config.authorization_contract)
    }

    pub fn max_authorization_age(env: Env) -> Result<u64, ContractError> {
        DaoVoting::config(&env).map(|config| config.max_authorization_age)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        DaoVoting::owner(&env)
    }

    // -------------------------------
    // Owner-only administration
    // -------------------------------
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        DaoVoting::transfer_ownership(env, caller, new_owner)
    }

    pub fn set_max_authorization_age(
        env: Env,
        caller: Address,
        max_authorization_age: u64,
    ) -> Result<(), ContractError> {
        DaoVoting::set_max_authorization_age(env, caller, max_authorization_age)
    }

    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        DaoVoting::upgrade(env, caller, new_wasm_hash)
    }
}
