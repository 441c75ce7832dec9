//! Off-chain signer stand-in for tests
//!
//! Signs message hashes the way an Ethereum wallet's `personal_sign` does,
//! so tests exercise the same bytes a production signer would produce.

use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};
use shared::constants::ETH_SIGNED_MESSAGE_PREFIX;
use soroban_sdk::{Bytes, BytesN, Env};

pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    /// Deterministic key built from a repeated seed byte (1..=0xfe)
    pub fn from_seed(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("seed is a valid scalar");
        Self { key }
    }

    /// 20-byte identity derived from the uncompressed public key
    pub fn identity(&self, env: &Env) -> BytesN<20> {
        let point = self.key.verifying_key().to_encoded_point(false);
        let hash = Keccak256::digest(&point.as_bytes()[1..]);

        let mut identity = [0u8; 20];
        identity.copy_from_slice(&hash[12..]);
        BytesN::from_array(env, &identity)
    }

    /// `personal_sign` a 32-byte message hash, returning `r || s || v` with v in {27, 28}
    pub fn sign(&self, env: &Env, message_hash: &BytesN<32>) -> Bytes {
        let mut hasher = Keccak256::new();
        hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
        hasher.update(message_hash.to_array());
        let signed_hash = hasher.finalize();

        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(signed_hash.as_slice())
            .expect("prehash signing");

        let mut raw = [0u8; 65];
        raw[..64].copy_from_slice(&signature.to_bytes());
        raw[64] = 27 + recovery_id.to_byte();
        Bytes::from_array(env, &raw)
    }
}
