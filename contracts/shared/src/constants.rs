//! Common constants used across the DAO voting contracts

// ===== Authorization Constants =====

/// Scope tag bound into every vote authorization
pub const VOTE_SCOPE: &str = "gov:proposal:vote";

/// Prefix applied by EIP-191 `personal_sign` to a 32-byte message hash
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Length of a recoverable signature: r (32) || s (32) || v (1)
pub const SIGNATURE_LENGTH: u32 = 65;

/// Width of the fixed-size integer words in the message encoding
pub const WORD_SIZE: usize = 32;

// ===== Governance Constants =====

/// Maximum proposal title length in bytes
pub const MAX_TITLE_LENGTH: u32 = 256;

// ===== Ledger TTL Constants =====
// ~5s per ledger: 17,280 ledgers per day.

/// One day in ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is bumped to this TTL on every write
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Instance storage is bumped once its TTL drops below this
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Proposals and voter entries are bumped to this TTL on write
pub const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;

/// Proposals and voter entries are bumped once their TTL drops below this
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
