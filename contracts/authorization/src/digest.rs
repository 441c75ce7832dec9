//! Canonical message encoding for signed authorizations
//!
//! Layout (every signer must reproduce it byte for byte):
//!
//! ```text
//! xdr(from) || xdr(to) || u256be(amount) || xdr(scope) || param || u256be(timestamp)
//! ```
//!
//! `xdr(x)` is the Stellar XDR encoding of the value as an `ScVal`, which is
//! self-delimiting. Integers are 32-byte big-endian words, `param` is copied
//! raw. The message hash is the keccak-256 of that payload.

use shared::{constants::ETH_SIGNED_MESSAGE_PREFIX, u256_word};
use soroban_sdk::{crypto::Hash, xdr::ToXdr, Address, Bytes, BytesN, Env, String};

/// The claimed fields of an off-chain authorization
#[derive(Clone)]
pub struct AuthorizationRequest {
    pub from: Address,
    pub to: Address,
    pub amount: u128,
    pub scope: String,
    pub param: BytesN<32>,
    pub timestamp: u64,
}

impl AuthorizationRequest {
    pub fn payload(&self, env: &Env) -> Bytes {
        let mut payload = self.from.clone().to_xdr(env);
        payload.append(&self.to.clone().to_xdr(env));
        payload.extend_from_array(&u256_word(self.amount));
        payload.append(&self.scope.clone().to_xdr(env));
        payload.extend_from_array(&self.param.to_array());
        payload.extend_from_array(&u256_word(self.timestamp as u128));
        payload
    }

    pub fn message_hash(&self, env: &Env) -> Hash<32> {
        env.crypto().keccak256(&self.payload(env))
    }
}

/// Hash actually signed by an EIP-191 `personal_sign` signer
pub fn eth_signed_message_hash(env: &Env, message_hash: &BytesN<32>) -> Hash<32> {
    let mut prefixed = Bytes::from_array(env, ETH_SIGNED_MESSAGE_PREFIX);
    prefixed.extend_from_array(&message_hash.to_array());
    env.crypto().keccak256(&prefixed)
}
