//! secp256k1 public key recovery and signer identities
//!
//! A signer is identified by the last 20 bytes of the keccak-256 of its
//! uncompressed public key (without the 0x04 tag), the same identity an
//! Ethereum wallet exposes as its address.

use shared::constants::SIGNATURE_LENGTH;
use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

/// secp256k1 group order n
const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// floor(n / 2), the largest accepted `s`
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

const ZERO_SCALAR: [u8; 32] = [0u8; 32];

/// A structurally valid `r || s || v` signature
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoverableSignature {
    pub rs: [u8; 64],
    pub recovery_id: u32,
}

impl RecoverableSignature {
    /// Parse a 65-byte signature, rejecting anything the host could not
    /// recover from deterministically.
    ///
    /// Accepts `v` as either the raw recovery id (0, 1) or the Ethereum
    /// form (27, 28). High-s signatures are malleable and rejected.
    pub fn parse(signature: &Bytes) -> Option<Self> {
        if signature.len() != SIGNATURE_LENGTH {
            return None;
        }

        let mut raw = [0u8; 65];
        signature.copy_into_slice(&mut raw);

        let recovery_id = match raw[64] {
            0 | 27 => 0,
            1 | 28 => 1,
            _ => return None,
        };

        let mut r = [0u8; 32];
        r.copy_from_slice(&raw[..32]);
        let mut s = [0u8; 32];
        s.copy_from_slice(&raw[32..64]);

        // big-endian arrays compare lexicographically, i.e. numerically
        if r == ZERO_SCALAR || r >= SECP256K1_ORDER {
            return None;
        }
        if s == ZERO_SCALAR || s > SECP256K1_HALF_ORDER {
            return None;
        }

        let mut rs = [0u8; 64];
        rs.copy_from_slice(&raw[..64]);
        Some(Self { rs, recovery_id })
    }
}

/// Recover the identity that produced `signature` over `digest`
pub fn recover_signer(env: &Env, digest: &Hash<32>, signature: &Bytes) -> Option<BytesN<20>> {
    let signature = RecoverableSignature::parse(signature)?;
    let public_key = env.crypto().secp256k1_recover(
        digest,
        &BytesN::from_array(env, &signature.rs),
        signature.recovery_id,
    );
    Some(signer_identity(env, &public_key))
}

/// Derive the 20-byte identity of an uncompressed SEC1 public key
pub fn signer_identity(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
    let key = Bytes::from_array(env, &public_key.to_array());
    let hash = env.crypto().keccak256(&key.slice(1..)).to_array();

    let mut identity = [0u8; 20];
    identity.copy_from_slice(&hash[12..]);
    BytesN::from_array(env, &identity)
}
