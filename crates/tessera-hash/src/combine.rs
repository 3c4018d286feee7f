//! Per-value dispatch and multi-value combination.
//!
//! A single value is hashed by the first rule that applies to its type:
//!
//! 1. the type's own [`Hashable`] implementation, used verbatim;
//! 2. built-in numbers, through [`hash_number`];
//! 3. types opting into their [`std::hash::Hash`] implementation
//!    ([`hash_std`], [`ByStd`], [`hashable_by_std!`](crate::hashable_by_std));
//! 4. plain-old-data types opting into raw byte hashing
//!    ([`hash_pod`], [`ByBytes`], [`hashable_by_bytes!`](crate::hashable_by_bytes)).
//!
//! Rules 1 and 2 are both `Hashable` impls (numbers are covered here, so a
//! number's hash cannot be overridden). Rules 3 and 4 are explicit opt-ins.
//! Anything else does not compile:
//!
//! ```compile_fail
//! use tessera_hash::hash_of;
//!
//! struct Opaque;
//! let _ = hash_of!(Opaque);
//! ```
//!
//! Several values are hashed one by one, packed in argument order as
//! little-endian 64-bit words, and the packing is byte-hashed. The result is
//! order-sensitive. Zero values give [`Hash::EMPTY`]; one value gives its
//! own hash unchanged.
//!
//! Raw byte hashing sees every byte of the representation.
//! `bytemuck::NoUninit` rules out implicit padding, so a type that needs
//! gaps between fields has to spell them out as explicit padding fields,
//! and those fields take part in the fingerprint: values equal
//! field-by-field but with different padding contents hash differently.

use crate::bytes::{self, hash_bytes};
use crate::hasher::FingerprintHasher;
use crate::number::hash_number;
use std::rc::Rc;
use std::sync::Arc;
use tessera_kernel::Hash;

/// A value with its own fingerprint.
pub trait Hashable {
    fn fingerprint(&self) -> Hash;
}

/// Combine already-computed fingerprints, in order.
pub fn combine(hashes: &[Hash]) -> Hash {
    combine_iter(hashes.iter().copied())
}

/// Combine fingerprints from an exact-size iterator, in order, without
/// collecting them.
///
/// Packing `n` fingerprints yields exactly `n` 8-byte blocks, so the byte
/// hash can be streamed one fingerprint at a time.
pub fn combine_iter<I>(hashes: I) -> Hash
where
    I: IntoIterator<Item = Hash>,
    I::IntoIter: ExactSizeIterator,
{
    let mut hashes = hashes.into_iter();
    let count = hashes.len();
    match count {
        0 => Hash::EMPTY,
        1 => hashes.next().unwrap_or(Hash::EMPTY),
        _ => {
            let state = hashes.fold(bytes::start(count * 8), |state, hash| {
                bytes::absorb(state, hash.bits())
            });
            bytes::finish(state)
        }
    }
}

/// Hash a value through its [`std::hash::Hash`] implementation.
pub fn hash_std<T: ?Sized + std::hash::Hash>(value: &T) -> Hash {
    use std::hash::Hasher;

    let mut hasher = FingerprintHasher::new();
    value.hash(&mut hasher);
    Hash(hasher.finish())
}

/// Hash the raw bytes of a plain-old-data value.
pub fn hash_pod<T: bytemuck::NoUninit>(value: &T) -> Hash {
    hash_bytes(bytemuck::bytes_of(value))
}

/// Hash the raw bytes of a run of plain-old-data values.
pub fn hash_pod_slice<T: bytemuck::NoUninit>(values: &[T]) -> Hash {
    hash_bytes(bytemuck::cast_slice(values))
}

/// Adapter hashing the wrapped value through [`std::hash::Hash`].
#[derive(Debug, Clone, Copy)]
pub struct ByStd<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized + std::hash::Hash> Hashable for ByStd<'_, T> {
    fn fingerprint(&self) -> Hash {
        hash_std(self.0)
    }
}

/// Adapter hashing the wrapped plain-old-data value byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct ByBytes<'a, T>(pub &'a T);

impl<T: bytemuck::NoUninit> Hashable for ByBytes<'_, T> {
    fn fingerprint(&self) -> Hash {
        hash_pod(self.0)
    }
}

/// Fingerprint zero or more values in order.
///
/// ```
/// use tessera_hash::{Hash, hash_of, hash_number};
///
/// assert_eq!(hash_of!(), Hash::EMPTY);
/// assert_eq!(hash_of!(5), hash_number(5));
/// assert_ne!(hash_of!(5, 10), hash_of!(10, 5));
/// ```
#[macro_export]
macro_rules! hash_of {
    () => {
        $crate::Hash::EMPTY
    };
    ($value:expr $(,)?) => {
        $crate::Hashable::fingerprint(&$value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::combine(&[$($crate::Hashable::fingerprint(&$value)),+])
    };
}

/// Implement [`Hashable`] through the types' [`std::hash::Hash`] impls.
#[macro_export]
macro_rules! hashable_by_std {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Hashable for $ty {
                fn fingerprint(&self) -> $crate::Hash {
                    $crate::hash_std(self)
                }
            }
        )+
    };
}

/// Implement [`Hashable`] by hashing the types' raw bytes.
#[macro_export]
macro_rules! hashable_by_bytes {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Hashable for $ty {
                fn fingerprint(&self) -> $crate::Hash {
                    $crate::hash_pod(self)
                }
            }
        )+
    };
}

macro_rules! hashable_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Hashable for $ty {
                fn fingerprint(&self) -> Hash {
                    hash_number(*self)
                }
            }
        )+
    };
}

hashable_number!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl Hashable for Hash {
    fn fingerprint(&self) -> Hash {
        *self
    }
}

impl Hashable for str {
    fn fingerprint(&self) -> Hash {
        hash_bytes(self.as_bytes())
    }
}

impl Hashable for String {
    fn fingerprint(&self) -> Hash {
        self.as_str().fingerprint()
    }
}

impl Hashable for () {
    fn fingerprint(&self) -> Hash {
        Hash::EMPTY
    }
}

impl<T: Hashable> Hashable for [T] {
    fn fingerprint(&self) -> Hash {
        combine_iter(self.iter().map(Hashable::fingerprint))
    }
}

impl<T: Hashable, const N: usize> Hashable for [T; N] {
    fn fingerprint(&self) -> Hash {
        self.as_slice().fingerprint()
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn fingerprint(&self) -> Hash {
        self.as_slice().fingerprint()
    }
}

impl<T: ?Sized + Hashable> Hashable for &T {
    fn fingerprint(&self) -> Hash {
        (**self).fingerprint()
    }
}

impl<T: ?Sized + Hashable> Hashable for Box<T> {
    fn fingerprint(&self) -> Hash {
        (**self).fingerprint()
    }
}

impl<T: ?Sized + Hashable> Hashable for Rc<T> {
    fn fingerprint(&self) -> Hash {
        (**self).fingerprint()
    }
}

impl<T: ?Sized + Hashable> Hashable for Arc<T> {
    fn fingerprint(&self) -> Hash {
        (**self).fingerprint()
    }
}

macro_rules! hashable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Hashable),+> Hashable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn fingerprint(&self) -> Hash {
                let ($($name,)+) = self;
                combine(&[$($name.fingerprint()),+])
            }
        }
    };
}

hashable_tuple!(A);
hashable_tuple!(A, B);
hashable_tuple!(A, B, C);
hashable_tuple!(A, B, C, D);
hashable_tuple!(A, B, C, D, E);
hashable_tuple!(A, B, C, D, E, F);
hashable_tuple!(A, B, C, D, E, F, G);
hashable_tuple!(A, B, C, D, E, F, G, H);
