use soroban_sdk::{Address, Env, String, Symbol};

pub fn proposal_created(env: &Env, proposal_id: u64, title: String, is_active: bool) {
    env.events().publish(
        (Symbol::new(env, "proposal_created"), proposal_id),
        (title, is_active),
    );
}

pub fn vote_cast(env: &Env, proposal_id: u64, voter: Address, amount: u128) {
    env.events()
        .publish((Symbol::new(env, "vote_cast"), proposal_id), (voter, amount));
}

pub fn owner_changed(env: &Env, previous: Address, new_owner: Address) {
    env.events()
        .publish((Symbol::new(env, "owner_changed"),), (previous, new_owner));
}

pub fn authorization_age_set(env: &Env, max_authorization_age: u64) {
    env.events()
        .publish((Symbol::new(env, "auth_age_set"),), max_authorization_age);
}
