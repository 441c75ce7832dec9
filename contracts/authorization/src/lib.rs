//! ID Authorization Contract
//!
//! Verifies off-chain authorizations issued by a trusted signer. An
//! authorization attests that account `to` may perform the action named by
//! `scope` (parameterized by `param`) against the consuming contract `from`,
//! with weight `amount`, as of `timestamp`.
//!
//! ## Signature scheme
//! - message hash: keccak-256 of the canonical payload (see `digest`)
//! - signed hash: EIP-191 `personal_sign` of the message hash
//! - signature: 65-byte secp256k1 `r || s || v`, low-s only
//!
//! `verify` only answers whether a signature over the tuple came from the
//! named signer. Expiry, replay and scope policy belong to the consumer.
//! `is_authorized` additionally pins the signer to the one configured here.

#![no_std]

use soroban_sdk::{
    contract, contractimpl, log, Address, Bytes, BytesN, Env, String, Symbol,
};

use shared::{require_owner, ContractError};

mod digest;
mod recovery;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use digest::AuthorizationRequest;
pub use recovery::RecoverableSignature;

#[contract]
pub struct IdAuthorizationContract;

#[contractimpl]
impl IdAuthorizationContract {
    /// Configure the owner and the authorized signer identity. Callable once.
    pub fn initialize(env: Env, owner: Address, signer: BytesN<20>) -> Result<(), ContractError> {
        if storage::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_authorized_signer(&env, &signer);

        env.events()
            .publish((Symbol::new(&env, "initialized"), owner), signer);

        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn authorized_signer(env: Env) -> Result<BytesN<20>, ContractError> {
        storage::get_authorized_signer(&env).ok_or(ContractError::NotInitialized)
    }

    /// Rotate the authorized signer (owner only)
    pub fn change_authorized_signer(
        env: Env,
        caller: Address,
        new_signer: BytesN<20>,
    ) -> Result<(), ContractError> {
        let owner = storage::get_owner(&env).ok_or(ContractError::NotInitialized)?;
        require_owner(&caller, &owner)?;

        let previous = storage::get_authorized_signer(&env).ok_or(ContractError::NotInitialized)?;
        storage::set_authorized_signer(&env, &new_signer);

        env.events().publish(
            (Symbol::new(&env, "signer_changed"), caller),
            (previous, new_signer),
        );

        Ok(())
    }

    pub fn get_message_hash(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
        scope: String,
        param: BytesN<32>,
        timestamp: u64,
    ) -> BytesN<32> {
        let request = AuthorizationRequest { from, to, amount, scope, param, timestamp };
        request.message_hash(&env).to_bytes()
    }

    pub fn get_eth_signed_message_hash(env: Env, message_hash: BytesN<32>) -> BytesN<32> {
        digest::eth_signed_message_hash(&env, &message_hash).to_bytes()
    }

    /// Recover the signer of an EIP-191 signature over `message_hash`.
    /// Returns `None` for malformed signatures.
    pub fn recover_signer(env: Env, message_hash: BytesN<32>, signature: Bytes) -> Option<BytesN<20>> {
        let signed_hash = digest::eth_signed_message_hash(&env, &message_hash);
        recovery::recover_signer(&env, &signed_hash, &signature)
    }

    pub fn verify(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
        scope: String,
        param: BytesN<32>,
        timestamp: u64,
        signer: BytesN<20>,
        signature: Bytes,
    ) -> bool {
        let request = AuthorizationRequest { from, to, amount, scope, param, timestamp };
        verify_request(&env, &request, &signer, &signature)
    }

    /// `verify` restricted to the configured authorized signer
    pub fn is_authorized(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
        scope: String,
        param: BytesN<32>,
        timestamp: u64,
        signer: BytesN<20>,
        signature: Bytes,
    ) -> bool {
        match storage::get_authorized_signer(&env) {
            Some(authorized) if authorized == signer => {}
            _ => {
                log!(&env, "authorization signer is not the configured signer");
                return false;
            }
        }

        let request = AuthorizationRequest { from, to, amount, scope, param, timestamp };
        verify_request(&env, &request, &signer, &signature)
    }
}

fn verify_request(
    env: &Env,
    request: &AuthorizationRequest,
    signer: &BytesN<20>,
    signature: &Bytes,
) -> bool {
    let message_hash = request.message_hash(env).to_bytes();
    let signed_hash = digest::eth_signed_message_hash(env, &message_hash);

    match recovery::recover_signer(env, &signed_hash, signature) {
        Some(recovered) => recovered == *signer,
        None => {
            log!(env, "malformed authorization signature");
            false
        }
    }
}

#[cfg(test)]
mod test;
