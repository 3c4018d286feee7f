//! Single-number hashing.
//!
//! The number is widened to a 64-bit pattern and run through one round of
//! the xor-shift/multiply finalizer. Like the byte hasher, only the first
//! of the two canonical rounds is applied, so zero hashes to zero.

use tessera_kernel::Hash;

const MIX: u64 = 0xff51afd7ed558ccd;

/// A built-in scalar with a 64-bit hashing pattern.
///
/// Every scalar converts by value like an `as u64` cast. Wider integers are
/// truncated and signed integers sign-extend. Floats drop their fraction and
/// saturate: negatives and NaN become `0`, values past `u64::MAX` become
/// `u64::MAX`.
pub trait Number: Copy {
    fn to_hash_bits(self) -> u64;
}

macro_rules! number_by_cast {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                fn to_hash_bits(self) -> u64 {
                    self as u64
                }
            }
        )+
    };
}

number_by_cast!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

/// Avalanche a raw 64-bit pattern.
pub const fn mix64(bits: u64) -> Hash {
    let mut x = bits;
    x ^= x >> 33;
    x = x.wrapping_mul(MIX);
    x ^= x >> 33;
    Hash(x)
}

/// Fingerprint of a single number.
pub fn hash_number<N: Number>(n: N) -> Hash {
    mix64(n.to_hash_bits())
}
