#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Bytes, BytesN, Env, IntoVal, String, Symbol,
};

use shared::{constants::VOTE_SCOPE, encode_proposal_param, ContractError};

use crate::{testutils::TestSigner, IdAuthorizationContract, IdAuthorizationContractClient};

// ── Test Helpers ─────────────────────────────────────────────────────────────

struct Setup<'a> {
    env: Env,
    owner: Address,
    signer: TestSigner,
    client: IdAuthorizationContractClient<'a>,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let signer = TestSigner::from_seed(7);

    let contract_id = env.register(IdAuthorizationContract, ());
    let client = IdAuthorizationContractClient::new(&env, &contract_id);
    client.initialize(&owner, &signer.identity(&env));

    Setup { env, owner, signer, client }
}

/// Field tuple of a vote authorization
#[derive(Clone)]
struct Fields {
    from: Address,
    to: Address,
    amount: u128,
    scope: String,
    param: BytesN<32>,
    timestamp: u64,
}

fn vote_fields(env: &Env) -> Fields {
    Fields {
        from: Address::generate(env),
        to: Address::generate(env),
        amount: 1,
        scope: String::from_str(env, VOTE_SCOPE),
        param: encode_proposal_param(env, 1),
        timestamp: 1_700_000_000,
    }
}

fn hash_of(client: &IdAuthorizationContractClient, f: &Fields) -> BytesN<32> {
    client.get_message_hash(&f.from, &f.to, &f.amount, &f.scope, &f.param, &f.timestamp)
}

fn verify(
    client: &IdAuthorizationContractClient,
    f: &Fields,
    signer: &BytesN<20>,
    signature: &Bytes,
) -> bool {
    client.verify(
        &f.from, &f.to, &f.amount, &f.scope, &f.param, &f.timestamp, signer, signature,
    )
}

// ── Initialization Tests ──────────────────────────────────────────────────────

#[test]
fn test_initialize_stores_configuration() {
    let s = setup();

    assert_eq!(s.client.owner(), s.owner);
    assert_eq!(s.client.authorized_signer(), s.signer.identity(&s.env));
}

#[test]
fn test_initialize_twice_fails() {
    let s = setup();
    let other = Address::generate(&s.env);

    let result = s.client.try_initialize(&other, &s.signer.identity(&s.env));
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
    assert_eq!(s.client.owner(), s.owner);
}

#[test]
fn test_queries_before_initialize_fail() {
    let env = Env::default();
    let contract_id = env.register(IdAuthorizationContract, ());
    let client = IdAuthorizationContractClient::new(&env, &contract_id);

    assert_eq!(client.try_owner(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.try_authorized_signer(), Err(Ok(ContractError::NotInitialized)));
}

// ── Message Hash Tests ────────────────────────────────────────────────────────

#[test]
fn test_message_hash_is_deterministic() {
    let s = setup();
    let fields = vote_fields(&s.env);

    assert_eq!(hash_of(&s.client, &fields), hash_of(&s.client, &fields));
}

#[test]
fn test_message_hash_changes_with_each_field() {
    let s = setup();
    let base = vote_fields(&s.env);
    let base_hash = hash_of(&s.client, &base);

    let mut swapped = base.clone();
    swapped.from = base.to.clone();
    swapped.to = base.from.clone();
    assert_ne!(hash_of(&s.client, &swapped), base_hash);

    let mut amount = base.clone();
    amount.amount = 2;
    assert_ne!(hash_of(&s.client, &amount), base_hash);

    let mut scope = base.clone();
    scope.scope = String::from_str(&s.env, "gov:proposal:create");
    assert_ne!(hash_of(&s.client, &scope), base_hash);

    let mut param = base.clone();
    param.param = encode_proposal_param(&s.env, 2);
    assert_ne!(hash_of(&s.client, &param), base_hash);

    let mut timestamp = base.clone();
    timestamp.timestamp += 1;
    assert_ne!(hash_of(&s.client, &timestamp), base_hash);
}

#[test]
fn test_eth_signed_hash_matches_personal_sign_prefix() {
    use sha3::{Digest, Keccak256};

    let s = setup();
    let message_hash = hash_of(&s.client, &vote_fields(&s.env));

    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n32");
    hasher.update(message_hash.to_array());
    let expected: [u8; 32] = hasher.finalize().into();

    assert_eq!(
        s.client.get_eth_signed_message_hash(&message_hash).to_array(),
        expected
    );
}

// ── Verification Tests ────────────────────────────────────────────────────────

#[test]
fn test_verify_accepts_signature_from_claimed_signer() {
    let s = setup();
    let fields = vote_fields(&s.env);
    let signature = s.signer.sign(&s.env, &hash_of(&s.client, &fields));

    assert!(verify(&s.client, &fields, &s.signer.identity(&s.env), &signature));
}

#[test]
fn test_verify_rejects_any_altered_field() {
    let s = setup();
    let base = vote_fields(&s.env);
    let identity = s.signer.identity(&s.env);
    let signature = s.signer.sign(&s.env, &hash_of(&s.client, &base));

    let mut altered = base.clone();
    altered.amount = 10;
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.scope = String::from_str(&s.env, "gov:proposal:veto");
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.param = encode_proposal_param(&s.env, 2);
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.timestamp -= 1;
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.from = Address::generate(&s.env);
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.to = Address::generate(&s.env);
    assert!(!verify(&s.client, &altered, &identity, &signature));

    let mut altered = base.clone();
    altered.from = base.to.clone();
    altered.to = base.from.clone();
    assert!(!verify(&s.client, &altered, &identity, &signature));

    assert!(verify(&s.client, &base, &identity, &signature));
}

#[test]
fn test_verify_rejects_other_signer() {
    let s = setup();
    let fields = vote_fields(&s.env);
    let impostor = TestSigner::from_seed(9);
    let signature = impostor.sign(&s.env, &hash_of(&s.client, &fields));

    assert!(!verify(&s.client, &fields, &s.signer.identity(&s.env), &signature));
    assert!(verify(&s.client, &fields, &impostor.identity(&s.env), &signature));
}

#[test]
fn test_malformed_signatures_fail_verification() {
    let s = setup();
    let fields = vote_fields(&s.env);
    let identity = s.signer.identity(&s.env);
    let valid = s.signer.sign(&s.env, &hash_of(&s.client, &fields));

    let mut raw = [0u8; 65];
    valid.copy_into_slice(&mut raw);

    // wrong lengths
    let short = valid.slice(0..64);
    assert!(!verify(&s.client, &fields, &identity, &short));
    let mut long = valid.clone();
    long.push_back(0);
    assert!(!verify(&s.client, &fields, &identity, &long));
    assert!(!verify(&s.client, &fields, &identity, &Bytes::new(&s.env)));

    // unknown recovery id
    let mut bad_v = raw;
    bad_v[64] = 29;
    assert!(!verify(&s.client, &fields, &identity, &Bytes::from_array(&s.env, &bad_v)));

    // zero r
    let mut zero_r = raw;
    zero_r[..32].copy_from_slice(&[0u8; 32]);
    assert!(!verify(&s.client, &fields, &identity, &Bytes::from_array(&s.env, &zero_r)));

    // s above the half order
    let mut high_s = raw;
    high_s[32..64].copy_from_slice(&[0xff; 32]);
    assert!(!verify(&s.client, &fields, &identity, &Bytes::from_array(&s.env, &high_s)));
}

#[test]
fn test_raw_recovery_id_is_accepted() {
    let s = setup();
    let fields = vote_fields(&s.env);
    let signature = s.signer.sign(&s.env, &hash_of(&s.client, &fields));

    let mut raw = [0u8; 65];
    signature.copy_into_slice(&mut raw);
    raw[64] -= 27;

    assert!(verify(
        &s.client,
        &fields,
        &s.signer.identity(&s.env),
        &Bytes::from_array(&s.env, &raw)
    ));
}

#[test]
fn test_recover_signer_returns_identity() {
    let s = setup();
    let message_hash = hash_of(&s.client, &vote_fields(&s.env));
    let signature = s.signer.sign(&s.env, &message_hash);

    assert_eq!(
        s.client.recover_signer(&message_hash, &signature),
        Some(s.signer.identity(&s.env))
    );
    assert_eq!(
        s.client.recover_signer(&message_hash, &signature.slice(0..10)),
        None
    );
}

// ── Pinned Signer Tests ───────────────────────────────────────────────────────

#[test]
fn test_is_authorized_requires_configured_signer() {
    let s = setup();
    let fields = vote_fields(&s.env);
    let message_hash = hash_of(&s.client, &fields);

    let good = s.signer.sign(&s.env, &message_hash);
    assert!(s.client.is_authorized(
        &fields.from,
        &fields.to,
        &fields.amount,
        &fields.scope,
        &fields.param,
        &fields.timestamp,
        &s.signer.identity(&s.env),
        &good,
    ));

    // valid signature, but from a signer the contract does not trust
    let impostor = TestSigner::from_seed(9);
    let forged = impostor.sign(&s.env, &message_hash);
    assert!(!s.client.is_authorized(
        &fields.from,
        &fields.to,
        &fields.amount,
        &fields.scope,
        &fields.param,
        &fields.timestamp,
        &impostor.identity(&s.env),
        &forged,
    ));
}

#[test]
fn test_change_authorized_signer() {
    let s = setup();
    let replacement = TestSigner::from_seed(11);
    let old_identity = s.signer.identity(&s.env);
    let new_identity = replacement.identity(&s.env);

    s.client.change_authorized_signer(&s.owner, &new_identity);
    assert_eq!(s.client.authorized_signer(), new_identity);

    let event = s.env.events().all().last().unwrap();
    assert_eq!(event.0, s.client.address);
    assert_eq!(
        event.1,
        (Symbol::new(&s.env, "signer_changed"), s.owner.clone()).into_val(&s.env)
    );
    let data: (BytesN<20>, BytesN<20>) = event.2.into_val(&s.env);
    assert_eq!(data, (old_identity, new_identity.clone()));

    // the rotated-out key no longer authorizes
    let fields = vote_fields(&s.env);
    let message_hash = hash_of(&s.client, &fields);
    let stale = s.signer.sign(&s.env, &message_hash);
    assert!(!s.client.is_authorized(
        &fields.from,
        &fields.to,
        &fields.amount,
        &fields.scope,
        &fields.param,
        &fields.timestamp,
        &s.signer.identity(&s.env),
        &stale,
    ));
}

#[test]
fn test_change_authorized_signer_owner_only() {
    let s = setup();
    let stranger = Address::generate(&s.env);
    let replacement = TestSigner::from_seed(11).identity(&s.env);

    let result = s.client.try_change_authorized_signer(&stranger, &replacement);
    assert_eq!(result, Err(Ok(ContractError::NotOwner)));
    assert_eq!(s.client.authorized_signer(), s.signer.identity(&s.env));
}
