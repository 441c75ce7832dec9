use soroban_sdk::{contracttype, Address, Env};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::types::{Proposal, VotingConfig};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Config,
    ProposalCount,
    Proposal(u64),
    Voter(u64, Address), // (proposal_id, voter)
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn get_config(env: &Env) -> Option<VotingConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &VotingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(proposal_id, voter.clone()))
}

pub fn set_voted(env: &Env, proposal_id: u64, voter: &Address) {
    let key = DataKey::Voter(proposal_id, voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
