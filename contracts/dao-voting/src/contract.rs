use soroban_sdk::{log, vec, Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Val, Vec};

use shared::{
    constants::VOTE_SCOPE,
    decode_proposal_param, require_owner, safe_add, validate_authorization_age, validate_title,
    ContractError,
};

use crate::events;
use crate::storage;
use crate::types::{Proposal, VotingConfig};

/// Name of the verifier entry point that also pins the trusted signer
const IS_AUTHORIZED_FN: &str = "is_authorized";

pub struct DaoVoting;

impl DaoVoting {
    // -------------------------------
    // Setup & Administration
    // -------------------------------
    pub fn initialize(
        env: Env,
        owner: Address,
        authorization_contract: Address,
        max_authorization_age: u64,
    ) -> Result<(), ContractError> {
        if storage::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_config(
            &env,
            &VotingConfig {
                authorization_contract,
                max_authorization_age,
            },
        );
        storage::set_proposal_count(&env, 0);

        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        let owner = Self::owner(&env)?;
        require_owner(&caller, &owner)?;

        storage::set_owner(&env, &new_owner);
        events::owner_changed(&env, owner, new_owner);

        Ok(())
    }

    pub fn set_max_authorization_age(
        env: Env,
        caller: Address,
        max_authorization_age: u64,
    ) -> Result<(), ContractError> {
        let owner = Self::owner(&env)?;
        require_owner(&caller, &owner)?;

        let mut config = Self::config(&env)?;
        config.max_authorization_age = max_authorization_age;
        storage::set_config(&env, &config);
        events::authorization_age_set(&env, max_authorization_age);

        Ok(())
    }

    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let owner = Self::owner(&env)?;
        require_owner(&caller, &owner)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // -------------------------------
    // Proposal Creation
    // -------------------------------
    pub fn create_proposal(
        env: Env,
        caller: Address,
        title: String,
        is_active: bool,
    ) -> Result<u64, ContractError> {
        let owner = Self::owner(&env)?;
        require_owner(&caller, &owner)?;
        validate_title(&title)?;

        let id = storage::get_proposal_count(&env)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;

        let proposal = Proposal {
            id,
            title: title.clone(),
            active: is_active,
            vote_count: 0,
            voter_count: 0,
        };

        storage::set_proposal(&env, &proposal);
        storage::set_proposal_count(&env, id);

        events::proposal_created(&env, id, title, is_active);

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(
        env: Env,
        voter: Address,
        amount: u128,
        param: BytesN<32>,
        timestamp: u64,
        signer: BytesN<20>,
        signature: Bytes,
    ) -> Result<(), ContractError> {
        let config = Self::config(&env)?;

        let proposal_id = decode_proposal_param(&param).ok_or(ContractError::ProposalNotFound)?;
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(ContractError::ProposalNotFound)?;

        if !proposal.active {
            return Err(ContractError::ProposalInactive);
        }

        if storage::has_voted(&env, proposal_id, &voter) {
            return Err(ContractError::AlreadyVoted);
        }

        let args: Vec<Val> = vec![
            &env,
            env.current_contract_address().into_val(&env),
            voter.clone().into_val(&env),
            amount.into_val(&env),
            String::from_str(&env, VOTE_SCOPE).into_val(&env),
            param.into_val(&env),
            timestamp.into_val(&env),
            signer.into_val(&env),
            signature.into_val(&env),
        ];
        // a signature the host cannot recover from traps the verifier
        let authorized = matches!(
            env.try_invoke_contract::<bool, ContractError>(
                &config.authorization_contract,
                &Symbol::new(&env, IS_AUTHORIZED_FN),
                args,
            ),
            Ok(Ok(true))
        );
        if !authorized {
            log!(&env, "vote authorization rejected", proposal_id, voter);
            return Err(ContractError::InvalidAuthorization);
        }

        validate_authorization_age(
            env.ledger().timestamp(),
            timestamp,
            config.max_authorization_age,
        )?;

        proposal.vote_count = safe_add(proposal.vote_count, amount)?;
        proposal.voter_count = proposal
            .voter_count
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;

        storage::set_voted(&env, proposal_id, &voter);
        storage::set_proposal(&env, &proposal);

        events::vote_cast(&env, proposal_id, voter, amount);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        storage::get_proposal(env, proposal_id).ok_or(ContractError::ProposalNotFound)
    }

    pub fn proposal_count(env: &Env) -> u64 {
        storage::get_proposal_count(env)
    }

    pub fn get_vote_count(env: &Env, proposal_id: u64) -> Result<u128, ContractError> {
        Self::get_proposal(env, proposal_id).map(|proposal| proposal.vote_count)
    }

    pub fn has_user_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
        storage::has_voted(env, proposal_id, voter)
    }

    pub fn owner(env: &Env) -> Result<Address, ContractError> {
        storage::get_owner(env).ok_or(ContractError::NotInitialized)
    }

    pub fn config(env: &Env) -> Result<VotingConfig, ContractError> {
        storage::get_config(env).ok_or(ContractError::NotInitialized)
    }
}
