use soroban_sdk::{contracttype, Address, BytesN, Env};

use shared::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    AuthorizedSigner,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
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

// ── Authorized Signer ────────────────────────────────────────────────────────

pub fn get_authorized_signer(env: &Env) -> Option<BytesN<20>> {
    env.storage().instance().get(&DataKey::AuthorizedSigner)
}

pub fn set_authorized_signer(env: &Env, signer: &BytesN<20>) {
    env.storage().instance().set(&DataKey::AuthorizedSigner, signer);
    bump_instance(env);
}
