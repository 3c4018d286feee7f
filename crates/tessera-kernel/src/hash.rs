//! The fingerprint value type.
//!
//! A [`Hash`] carries no identity beyond its bit pattern. It is produced by
//! the engine in `tessera-hash` and consumed by containers for equality
//! acceleration and keying.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-width 64-bit fingerprint.
///
/// The all-zero pattern doubles as the "empty" sentinel: it is what
/// combining zero values yields, and it is the only value that converts
/// to `false`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Hash(pub u64);

impl Hash {
    /// The empty sentinel.
    pub const EMPTY: Hash = Hash(0);

    /// The largest representable fingerprint.
    pub const MAX: Hash = Hash(u64::MAX);

    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Boolean view of the fingerprint: false only when every bit is zero.
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Byte representation used when several fingerprints are packed
    /// together and re-hashed.
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for Hash {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Hash> for u64 {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl From<Hash> for bool {
    fn from(hash: Hash) -> Self {
        hash.is_set()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
