//! # Tessera Hash
//!
//! Fast, deterministic, non-cryptographic 64-bit fingerprints.
//!
//! ```text
//! hash_bytes      ← byte runs (const, little-endian blocks)
//! hash_number     ← single scalars (one avalanche round)
//!     │
//! Hashable        ← per-value fingerprint, own impl or built-in
//!     │
//! combine / hash_of!  ← ordered combination of several fingerprints
//! ```
//!
//! Fingerprints are identical across runs, processes and targets. They are
//! not suitable where collisions can be forced by an adversary.
//!
//! ```
//! use tessera_hash::{Hash, hash_bytes, hash_of};
//!
//! let key = hash_of!("user", 42_u32);
//! assert_eq!(key, hash_of!(String::from("user"), 42_u32));
//! assert_ne!(key, hash_of!(42_u32, "user"));
//! assert_eq!(hash_bytes(b""), Hash(0xe17a1465));
//! ```

pub mod bytes;
pub mod combine;
pub mod hasher;
pub mod number;

pub use bytes::{MULTIPLIER, SEED, hash_bytes};
pub use combine::{
    ByBytes, ByStd, Hashable, combine, combine_iter, hash_pod, hash_pod_slice, hash_std,
};
pub use hasher::{BuildFingerprint, FingerprintHasher, FingerprintMap};
pub use number::{Number, hash_number, mix64};
pub use tessera_kernel::Hash;
