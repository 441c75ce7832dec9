//! Fixed-width encodings shared by signers and verifiers
//!
//! A vote authorization carries the target proposal id in its 32-byte
//! `param` field as a big-endian, left-zero-padded integer.

use crate::constants::WORD_SIZE;
use soroban_sdk::{BytesN, Env};

/// Encode an unsigned integer as a 32-byte big-endian word
pub fn u256_word(value: u128) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a proposal id into the `param` field of an authorization
pub fn encode_proposal_param(env: &Env, proposal_id: u64) -> BytesN<32> {
    BytesN::from_array(env, &u256_word(proposal_id as u128))
}

/// Decode the proposal id carried by `param`
///
/// Returns `None` when the value does not fit in a `u64`; such a param can
/// never name a registered proposal.
pub fn decode_proposal_param(param: &BytesN<32>) -> Option<u64> {
    let raw = param.to_array();
    if raw[..WORD_SIZE - 8].iter().any(|b| *b != 0) {
        return None;
    }

    let mut id = [0u8; 8];
    id.copy_from_slice(&raw[WORD_SIZE - 8..]);
    Some(u64::from_be_bytes(id))
}
