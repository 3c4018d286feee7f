//! A [`std::hash::Hasher`] built on the fingerprint primitives.
//!
//! Each write is byte-hashed on its own and folded into the running state
//! with [`combine`](crate::combine). Integer writes use little-endian bytes
//! and `usize`/`isize` are widened to 64 bits, so the output is the same on
//! every target. The hasher is unkeyed and offers no HashDoS resistance.

use crate::bytes::hash_bytes;
use crate::combine::combine;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};
use tessera_kernel::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintHasher {
    state: Hash,
}

impl FingerprintHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fingerprint(&self) -> Hash {
        self.state
    }
}

impl Hasher for FingerprintHasher {
    fn finish(&self) -> u64 {
        self.state.bits()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = combine(&[self.state, hash_bytes(bytes)]);
    }

    fn write_u8(&mut self, n: u8) {
        self.write(&[n]);
    }

    fn write_u16(&mut self, n: u16) {
        self.write(&n.to_le_bytes());
    }

    fn write_u32(&mut self, n: u32) {
        self.write(&n.to_le_bytes());
    }

    fn write_u64(&mut self, n: u64) {
        self.write(&n.to_le_bytes());
    }

    fn write_u128(&mut self, n: u128) {
        self.write(&n.to_le_bytes());
    }

    fn write_usize(&mut self, n: usize) {
        self.write_u64(n as u64);
    }

    fn write_isize(&mut self, n: isize) {
        self.write_u64(n as i64 as u64);
    }
}

/// [`BuildHasher`] producing fresh [`FingerprintHasher`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildFingerprint;

impl BuildHasher for BuildFingerprint {
    type Hasher = FingerprintHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FingerprintHasher::new()
    }
}

/// A `HashMap` keyed through fingerprints.
pub type FingerprintMap<K, V> = HashMap<K, V, BuildFingerprint>;
