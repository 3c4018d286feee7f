//! Payload marker for semantic wrappers.
//!
//! A type may be wrapped only if it implements [`Transferable`]. The
//! wrappers themselves never do, which is what makes nesting a semantic
//! inside another semantic a compile error.
//!
//! User types opt in with [`transferable!`](crate::transferable).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use tessera_kernel::Hash;

/// A type that can be the payload of a semantic wrapper.
pub trait Transferable {}

/// Mark one or more types as [`Transferable`].
///
/// ```
/// use tessera_semantics::{copy, transferable};
///
/// struct Mesh {
///     vertices: Vec<f32>,
/// }
/// transferable!(Mesh);
///
/// let mesh = Mesh { vertices: vec![0.0; 3] };
/// let shared = copy(&mesh);
/// assert_eq!(shared.value().vertices.len(), 3);
/// ```
#[macro_export]
macro_rules! transferable {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Transferable for $ty {})+
    };
}

transferable!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
    Hash,
);

impl<T: Transferable> Transferable for [T] {}
impl<T: Transferable, const N: usize> Transferable for [T; N] {}
impl<T: Transferable> Transferable for Vec<T> {}
impl<T: Transferable> Transferable for VecDeque<T> {}
impl<T: Transferable> Transferable for Option<T> {}
impl<T: ?Sized + Transferable> Transferable for Box<T> {}
impl<T: ?Sized + Transferable> Transferable for Rc<T> {}
impl<T: ?Sized + Transferable> Transferable for Arc<T> {}
impl<K: Transferable, V: Transferable, S> Transferable for HashMap<K, V, S> {}
impl<K: Transferable, V: Transferable> Transferable for BTreeMap<K, V> {}
impl<T: Transferable, S> Transferable for HashSet<T, S> {}
impl<T: Transferable> Transferable for BTreeSet<T> {}

macro_rules! transferable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Transferable),+> Transferable for ($($name,)+) {}
    };
}

transferable_tuple!(A);
transferable_tuple!(A, B);
transferable_tuple!(A, B, C);
transferable_tuple!(A, B, C, D);
transferable_tuple!(A, B, C, D, E);
transferable_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_transferable<T: ?Sized + Transferable>() {}

    #[test]
    fn std_payloads_are_transferable() {
        assert_transferable::<u8>();
        assert_transferable::<str>();
        assert_transferable::<[i64]>();
        assert_transferable::<[u8; 16]>();
        assert_transferable::<Vec<String>>();
        assert_transferable::<Option<Box<str>>>();
        assert_transferable::<Rc<[u32]>>();
        assert_transferable::<Arc<Vec<f64>>>();
        assert_transferable::<HashMap<String, Vec<u8>>>();
        assert_transferable::<(u8, String, Hash)>();
    }

    struct Widget;
    transferable!(Widget);

    #[test]
    fn macro_marks_user_types() {
        assert_transferable::<Widget>();
        assert_transferable::<Vec<Widget>>();
    }
}
