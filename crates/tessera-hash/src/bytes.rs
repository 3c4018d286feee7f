//! Byte-run hashing.
//!
//! A 64-bit multiply-xor-multiply accumulation over 8-byte blocks with a
//! fixed odd multiplier and seed. Trailing bytes are folded in before one
//! last multiply, and a single avalanche shift finishes the value.
//!
//! The canonical form of this construction ends with a second
//! multiply-and-shift round. It is deliberately not applied here: existing
//! fingerprints depend on the single-round output.

use tessera_kernel::Hash;

/// Fixed odd multiplier.
pub const MULTIPLIER: u64 = 0xc6a4a7935bd1e995;

/// Fixed seed.
pub const SEED: u64 = 0xe17a1465;

const SHIFT: u32 = 47;

/// Fingerprint of `bytes`.
///
/// Blocks are read little-endian so the result does not depend on the host.
/// An empty run hashes to a value derived from the seed alone.
pub const fn hash_bytes(bytes: &[u8]) -> Hash {
    let len = bytes.len();
    let mut state = start(len);

    let blocks = len / 8;
    let mut i = 0;
    while i < blocks {
        state = absorb(state, read_block(bytes, i * 8));
        i += 1;
    }

    let base = blocks * 8;
    let mut remaining = len & 7;
    if remaining != 0 {
        while remaining > 0 {
            remaining -= 1;
            state ^= (bytes[base + remaining] as u64) << (8 * remaining);
        }
        state = state.wrapping_mul(MULTIPLIER);
    }

    finish(state)
}

/// Initial accumulator for a run of `len` bytes.
pub(crate) const fn start(len: usize) -> u64 {
    SEED ^ (len as u64).wrapping_mul(MULTIPLIER)
}

/// Fold one 8-byte block into the accumulator.
pub(crate) const fn absorb(state: u64, block: u64) -> u64 {
    let mut k = block.wrapping_mul(MULTIPLIER);
    k ^= k >> SHIFT;
    k = k.wrapping_mul(MULTIPLIER);
    (state ^ k).wrapping_mul(MULTIPLIER)
}

pub(crate) const fn finish(state: u64) -> Hash {
    Hash(state ^ (state >> SHIFT))
}

const fn read_block(bytes: &[u8], at: usize) -> u64 {
    u64::from_le_bytes([
        bytes[at],
        bytes[at + 1],
        bytes[at + 2],
        bytes[at + 3],
        bytes[at + 4],
        bytes[at + 5],
        bytes[at + 6],
        bytes[at + 7],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_the_seed() {
        assert_eq!(hash_bytes(&[]), Hash(SEED));
        assert_eq!(hash_bytes(b""), hash_bytes(&[0u8; 16][..0]));
    }

    #[test]
    fn known_vectors() {
        assert_eq!(hash_bytes(b"a"), Hash(0xc761b8b1be4500a6));
        assert_eq!(hash_bytes(b"abc"), Hash(0x0061beb719813114));
        assert_eq!(hash_bytes(b"12345678"), Hash(0x82d64eb9563b2795));
        assert_eq!(hash_bytes(b"hello world"), Hash(0x0a292f4fe1ea3866));
    }

    #[test]
    fn same_bytes_same_hash() {
        let first = hash_bytes(b"abc");
        let second = hash_bytes(&[b'a', b'b', b'c']);
        assert_eq!(first, second);
    }

    #[test]
    fn length_participates() {
        assert_ne!(hash_bytes(&[0]), hash_bytes(&[0, 0]));
        assert_ne!(hash_bytes(&[0; 8]), hash_bytes(&[0; 9]));
    }

    #[test]
    fn every_tail_byte_participates() {
        let base = *b"0123456789abcde";
        let reference = hash_bytes(&base);
        for i in 8..base.len() {
            let mut changed = base;
            changed[i] ^= 0x01;
            assert_ne!(hash_bytes(&changed), reference, "tail byte {i} ignored");
        }
    }

    #[test]
    fn usable_in_const_context() {
        const TAG: Hash = hash_bytes(b"abc");
        assert_eq!(TAG, hash_bytes(b"abc"));
    }
}
