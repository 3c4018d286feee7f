//! Consumer side of the protocol.
//!
//! A type that accepts semantic wrappers implements [`SemanticNew`], one
//! method per physical operation. [`Semantic::construct`] picks the method
//! from the wrapper's type, so selecting the operation costs nothing at
//! runtime.
//!
//! [`SemanticNew::new_abandoned`] is the explicit hook for a type's
//! fast-path partial reset. Types without one fall back to a full move.

use crate::transferable::Transferable;
use crate::wrapper::Semantic;
use std::rc::Rc;
use std::sync::Arc;
use tessera_kernel::Hash;

/// Construction from any semantic wrapper.
pub trait SemanticNew: Transferable + Sized {
    /// Shallow duplicate sharing ownership (Copy).
    fn new_copied(source: &Self) -> Self;

    /// Take the source's resources and fully reset it (Move).
    fn new_moved(source: &mut Self) -> Self;

    /// Take the source's resources, resetting only what its destruction
    /// needs (Abandon). The source will not be read again.
    fn new_abandoned(source: &mut Self) -> Self {
        Self::new_moved(source)
    }

    /// Shallow duplicate without ownership bookkeeping (Disown).
    fn new_disowned(source: &Self) -> Self {
        Self::new_copied(source)
    }

    /// Recursive duplicate of every owned sub-resource (Clone).
    fn new_cloned(source: &Self) -> Self;

    fn semantic_new<S: Semantic<Payload = Self>>(source: S) -> Self {
        source.construct()
    }
}

/// Assignment from any semantic wrapper.
pub trait SemanticAssign: SemanticNew {
    fn semantic_assign<S: Semantic<Payload = Self>>(&mut self, source: S) {
        *self = source.construct();
    }
}

impl<T: SemanticNew> SemanticAssign for T {}

macro_rules! semantic_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SemanticNew for $ty {
                fn new_copied(source: &Self) -> Self {
                    *source
                }

                fn new_moved(source: &mut Self) -> Self {
                    std::mem::take(source)
                }

                fn new_abandoned(source: &mut Self) -> Self {
                    *source
                }

                fn new_cloned(source: &Self) -> Self {
                    *source
                }
            }
        )+
    };
}

semantic_scalar!(
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
    Hash,
);

impl SemanticNew for String {
    fn new_copied(source: &Self) -> Self {
        source.clone()
    }

    fn new_moved(source: &mut Self) -> Self {
        std::mem::take(source)
    }

    fn new_cloned(source: &Self) -> Self {
        source.clone()
    }
}

impl<T: SemanticNew> SemanticNew for Vec<T> {
    fn new_copied(source: &Self) -> Self {
        source.iter().map(T::new_copied).collect()
    }

    fn new_moved(source: &mut Self) -> Self {
        std::mem::take(source)
    }

    fn new_disowned(source: &Self) -> Self {
        source.iter().map(T::new_disowned).collect()
    }

    fn new_cloned(source: &Self) -> Self {
        source.iter().map(T::new_cloned).collect()
    }
}

impl<T: SemanticNew> SemanticNew for Option<T> {
    fn new_copied(source: &Self) -> Self {
        source.as_ref().map(T::new_copied)
    }

    fn new_moved(source: &mut Self) -> Self {
        source.take()
    }

    // The option stays engaged; only the payload's mandatory state is reset.
    fn new_abandoned(source: &mut Self) -> Self {
        source.as_mut().map(T::new_abandoned)
    }

    fn new_disowned(source: &Self) -> Self {
        source.as_ref().map(T::new_disowned)
    }

    fn new_cloned(source: &Self) -> Self {
        source.as_ref().map(T::new_cloned)
    }
}

// Move and Abandon take the allocation itself; the source keeps a fresh
// default box.
impl<T: SemanticNew + Default> SemanticNew for Box<T> {
    fn new_copied(source: &Self) -> Self {
        Box::new(T::new_copied(source))
    }

    fn new_moved(source: &mut Self) -> Self {
        std::mem::take(source)
    }

    fn new_abandoned(source: &mut Self) -> Self {
        std::mem::take(source)
    }

    fn new_disowned(source: &Self) -> Self {
        Box::new(T::new_disowned(source))
    }

    fn new_cloned(source: &Self) -> Self {
        Box::new(T::new_cloned(source))
    }
}

macro_rules! semantic_shared_pointer {
    ($ptr:ident) => {
        impl<T: SemanticNew + Default> SemanticNew for $ptr<T> {
            fn new_copied(source: &Self) -> Self {
                $ptr::clone(source)
            }

            fn new_moved(source: &mut Self) -> Self {
                std::mem::take(source)
            }

            // The abandoned handle is only ever dropped, which releases the
            // extra count; no replacement allocation is needed.
            fn new_abandoned(source: &mut Self) -> Self {
                $ptr::clone(source)
            }

            fn new_cloned(source: &Self) -> Self {
                $ptr::new(T::new_cloned(source))
            }
        }
    };
}

semantic_shared_pointer!(Rc);
semantic_shared_pointer!(Arc);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapper::{abandon, clone, copy, disown, move_from};

    #[test]
    fn scalar_move_resets_and_abandon_does_not() {
        let mut moved_source = 41_i32;
        let moved = i32::semantic_new(move_from(&mut moved_source));
        assert_eq!((moved, moved_source), (41, 0));

        let mut abandoned_source = 41_i32;
        let abandoned = i32::semantic_new(abandon(&mut abandoned_source));
        assert_eq!((abandoned, abandoned_source), (41, 41));
    }

    #[test]
    fn string_transfers() {
        let mut text = String::from("payload");
        assert_eq!(String::semantic_new(copy(&text)), "payload");
        assert_eq!(String::semantic_new(clone(&text)), "payload");
        assert_eq!(String::semantic_new(disown(&text)), "payload");
        assert_eq!(text, "payload");

        let taken = String::semantic_new(move_from(&mut text));
        assert_eq!(taken, "payload");
        assert!(text.is_empty());
    }

    #[test]
    fn vec_move_steals_buffer() {
        let mut items = vec![1_u64, 2, 3];
        let buffer = items.as_ptr();
        let stolen = Vec::semantic_new(move_from(&mut items));
        assert_eq!(stolen.as_ptr(), buffer);
        assert!(items.is_empty());
    }

    #[test]
    fn vec_clone_is_independent() {
        let items = vec![String::from("a"), String::from("b")];
        let copied = Vec::semantic_new(clone(&items));
        assert_eq!(copied, items);
        assert_ne!(copied[0].as_ptr(), items[0].as_ptr());
    }

    #[test]
    fn option_abandon_keeps_engaged_source() {
        let mut slot = Some(9_u8);
        let abandoned = Option::semantic_new(abandon(&mut slot));
        assert_eq!(abandoned, Some(9));
        assert_eq!(slot, Some(9));

        let moved = Option::semantic_new(move_from(&mut slot));
        assert_eq!(moved, Some(9));
        assert_eq!(slot, None);
    }

    #[test]
    fn box_move_steals_allocation() {
        let mut boxed = Box::new(String::from("inner"));
        let allocation: *const String = &*boxed;
        let moved = Box::semantic_new(move_from(&mut boxed));
        assert!(std::ptr::eq(&*moved, allocation));
        assert_eq!(*moved, "inner");
        assert!(boxed.is_empty());
    }

    #[test]
    fn box_abandon_steals_allocation() {
        let mut boxed = Box::new(vec![1_u8, 2]);
        let allocation: *const Vec<u8> = &*boxed;
        let abandoned = Box::semantic_new(abandon(&mut boxed));
        assert!(std::ptr::eq(&*abandoned, allocation));
        assert_eq!(*abandoned, vec![1, 2]);
    }

    #[test]
    fn rc_copy_shares_and_clone_duplicates() {
        let shared = Rc::new(String::from("shared"));
        let copied = Rc::semantic_new(copy(&shared));
        assert!(Rc::ptr_eq(&copied, &shared));
        assert_eq!(Rc::strong_count(&shared), 2);

        let cloned = Rc::semantic_new(clone(&shared));
        assert!(!Rc::ptr_eq(&cloned, &shared));
        assert_eq!(*cloned, *shared);
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn arc_move_leaves_default_behind() {
        let mut shared = Arc::new(7_u32);
        let original = Arc::clone(&shared);
        let moved = Arc::semantic_new(move_from(&mut shared));
        assert!(Arc::ptr_eq(&moved, &original));
        assert_eq!(*shared, 0);
    }

    #[test]
    fn arc_abandon_releases_on_drop() {
        let mut shared = Arc::new(7_u32);
        let abandoned = Arc::semantic_new(abandon(&mut shared));
        assert_eq!(Arc::strong_count(&abandoned), 2);
        drop(shared);
        assert_eq!(Arc::strong_count(&abandoned), 1);
    }

    #[test]
    fn assign_replaces_destination() {
        let mut target = vec![0_u8; 4];
        let mut source = vec![1_u8, 2];
        target.semantic_assign(move_from(&mut source));
        assert_eq!(target, vec![1, 2]);
        assert!(source.is_empty());

        let template = vec![5_u8];
        target.semantic_assign(copy(&template));
        assert_eq!(target, template);
    }
}
