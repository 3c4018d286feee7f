//! The five semantic wrappers and their factories.
//!
//! A wrapper is a transient annotation over a borrow: produced at a call
//! site by [`copy`], [`move_from`], [`abandon`], [`disown`] or [`clone`],
//! passed by value through a few layers, and consumed exactly once by a
//! constructor. It owns nothing, is never `Clone`, and cannot be reused
//! once consumed.
//!
//! Copy, Disown and Clone borrow the source shared. Move and Abandon borrow
//! it exclusively, so a constant source cannot be moved or abandoned:
//!
//! ```compile_fail
//! use tessera_semantics::move_from;
//!
//! let text = String::from("frozen");
//! let _ = move_from(&text);
//! ```
//!
//! ```compile_fail
//! use tessera_semantics::abandon;
//!
//! let text = String::from("frozen");
//! let _ = abandon(&mut text);
//! ```
//!
//! Wrappers are not payloads, so semantics do not nest:
//!
//! ```compile_fail
//! use tessera_semantics::copy;
//!
//! let value = 7_u32;
//! let once = copy(&value);
//! let _ = copy(&once);
//! ```
//!
//! ```compile_fail
//! use tessera_semantics::{clone, move_from};
//!
//! let mut value = vec![1_u8];
//! let mut moved = move_from(&mut value);
//! let _ = clone(&moved);
//! ```
//!
//! ```compile_fail
//! use tessera_semantics::{disown, abandon};
//!
//! let value = 1.5_f64;
//! let mut disowned = disown(&value);
//! let _ = abandon(&mut disowned);
//! ```
//!
//! ```compile_fail
//! use tessera_semantics::{copy, move_from};
//!
//! let value = 'x';
//! let mut copied = copy(&value);
//! let _ = move_from(&mut copied);
//! ```
//!
//! ```compile_fail
//! use tessera_semantics::{clone, disown};
//!
//! let value = String::from("deep");
//! let cloned = clone(&value);
//! let _ = disown(&cloned);
//! ```

use crate::construct::SemanticNew;
use crate::tag::{Operation, SemanticTag};
use crate::transferable::Transferable;

mod sealed {
    pub trait Sealed {}
}

/// Behaviour shared by every semantic wrapper.
///
/// The tag and its flags are associated constants: a consumer selecting
/// on them compiles down to the single chosen branch.
pub trait Semantic: Sized + sealed::Sealed {
    /// The wrapped type.
    type Payload: ?Sized + Transferable;

    /// The borrow this tag takes of a payload: `&U` or `&mut U`.
    type Source<'b, U: ?Sized + Transferable + 'b>;

    /// The same tag over another payload.
    type Nested<'b, U: ?Sized + Transferable + 'b>: Semantic<Payload = U>;

    const TAG: SemanticTag;
    const KEEP: bool = Self::TAG.keep();
    const MOVE: bool = Self::TAG.moves();
    const SHALLOW: bool = Self::TAG.shallow();
    const OPERATION: Operation = Self::TAG.operation();

    /// Wrap a different value with this wrapper's tag.
    fn nest<'b, U: ?Sized + Transferable + 'b>(
        value: Self::Source<'b, U>,
    ) -> Self::Nested<'b, U>;

    /// Read access to the wrapped source.
    fn value(&self) -> &Self::Payload;

    /// Consume the wrapper, building a new owner with this tag's operation.
    fn construct(self) -> Self::Payload
    where
        Self::Payload: SemanticNew;

    fn tag(&self) -> SemanticTag {
        Self::TAG
    }
}

/// Shallow copy intent.
#[derive(Debug)]
#[must_use = "a semantic wrapper does nothing until a constructor consumes it"]
pub struct Copied<'a, T: ?Sized + Transferable> {
    value: &'a T,
}

/// Move intent: the source is fully reset after the transfer.
#[derive(Debug)]
#[must_use = "a semantic wrapper does nothing until a constructor consumes it"]
pub struct Moved<'a, T: ?Sized + Transferable> {
    value: &'a mut T,
}

/// Abandon intent: like a move, but the source is only reset as far as its
/// destruction requires. The caller guarantees it is never read again.
#[derive(Debug)]
#[must_use = "a semantic wrapper does nothing until a constructor consumes it"]
pub struct Abandoned<'a, T: ?Sized + Transferable> {
    value: &'a mut T,
}

/// Disown intent: shallow copy that skips ownership bookkeeping.
#[derive(Debug)]
#[must_use = "a semantic wrapper does nothing until a constructor consumes it"]
pub struct Disowned<'a, T: ?Sized + Transferable> {
    value: &'a T,
}

/// Clone intent: deep, recursive copy.
#[derive(Debug)]
#[must_use = "a semantic wrapper does nothing until a constructor consumes it"]
pub struct Cloned<'a, T: ?Sized + Transferable> {
    value: &'a T,
}

/// Shallow-copy a value.
pub fn copy<T: ?Sized + Transferable>(value: &T) -> Copied<'_, T> {
    Copied::new(value)
}

/// Move a value, resetting the source. Named `move_from` because `move` is
/// reserved.
pub fn move_from<T: ?Sized + Transferable>(value: &mut T) -> Moved<'_, T> {
    Moved::new(value)
}

/// Abandon a value: same as a move, but only the mandatory parts of the
/// source get reset.
pub fn abandon<T: ?Sized + Transferable>(value: &mut T) -> Abandoned<'_, T> {
    Abandoned::new(value)
}

/// Disown a value: same as a shallow copy, but never referenced.
pub fn disown<T: ?Sized + Transferable>(value: &T) -> Disowned<'_, T> {
    Disowned::new(value)
}

/// Clone a value deeply.
pub fn clone<T: ?Sized + Transferable>(value: &T) -> Cloned<'_, T> {
    Cloned::new(value)
}

macro_rules! shared_semantic {
    ($wrapper:ident, $tag:expr, $ctor:ident) => {
        impl<'a, T: ?Sized + Transferable> $wrapper<'a, T> {
            pub fn new(value: &'a T) -> Self {
                Self { value }
            }

            pub fn value(&self) -> &'a T {
                self.value
            }

            pub fn into_inner(self) -> &'a T {
                self.value
            }

            /// Re-bind to a part of the source, keeping the tag.
            pub fn forward<U: ?Sized + Transferable>(
                self,
                project: impl FnOnce(&'a T) -> &'a U,
            ) -> $wrapper<'a, U> {
                $wrapper::new(project(self.value))
            }
        }

        impl<T: ?Sized + Transferable> sealed::Sealed for $wrapper<'_, T> {}

        impl<'a, T: ?Sized + Transferable> Semantic for $wrapper<'a, T> {
            type Payload = T;
            type Source<'b, U: ?Sized + Transferable + 'b> = &'b U;
            type Nested<'b, U: ?Sized + Transferable + 'b> = $wrapper<'b, U>;

            const TAG: SemanticTag = $tag;

            fn nest<'b, U: ?Sized + Transferable + 'b>(value: &'b U) -> $wrapper<'b, U> {
                $wrapper::new(value)
            }

            fn value(&self) -> &T {
                self.value
            }

            fn construct(self) -> T
            where
                T: SemanticNew,
            {
                T::$ctor(self.value)
            }
        }
    };
}

macro_rules! exclusive_semantic {
    ($wrapper:ident, $tag:expr, $ctor:ident) => {
        impl<'a, T: ?Sized + Transferable> $wrapper<'a, T> {
            pub fn new(value: &'a mut T) -> Self {
                Self { value }
            }

            pub fn value(&self) -> &T {
                &*self.value
            }

            pub fn value_mut(&mut self) -> &mut T {
                &mut *self.value
            }

            pub fn into_inner(self) -> &'a mut T {
                self.value
            }

            /// Re-bind to a part of the source, keeping the tag.
            pub fn forward<U: ?Sized + Transferable>(
                self,
                project: impl FnOnce(&'a mut T) -> &'a mut U,
            ) -> $wrapper<'a, U> {
                $wrapper::new(project(self.value))
            }
        }

        impl<T: ?Sized + Transferable> sealed::Sealed for $wrapper<'_, T> {}

        impl<'a, T: ?Sized + Transferable> Semantic for $wrapper<'a, T> {
            type Payload = T;
            type Source<'b, U: ?Sized + Transferable + 'b> = &'b mut U;
            type Nested<'b, U: ?Sized + Transferable + 'b> = $wrapper<'b, U>;

            const TAG: SemanticTag = $tag;

            fn nest<'b, U: ?Sized + Transferable + 'b>(value: &'b mut U) -> $wrapper<'b, U> {
                $wrapper::new(value)
            }

            fn value(&self) -> &T {
                &*self.value
            }

            fn construct(self) -> T
            where
                T: SemanticNew,
            {
                T::$ctor(self.value)
            }
        }
    };
}

shared_semantic!(Copied, SemanticTag::Copy, new_copied);
exclusive_semantic!(Moved, SemanticTag::Move, new_moved);
exclusive_semantic!(Abandoned, SemanticTag::Abandon, new_abandoned);
shared_semantic!(Disowned, SemanticTag::Disown, new_disowned);
shared_semantic!(Cloned, SemanticTag::Clone, new_cloned);

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_of<S: Semantic>(_: &S) -> (bool, bool, bool) {
        (S::KEEP, S::MOVE, S::SHALLOW)
    }

    #[test]
    fn wrapper_flags_match_tags() {
        let mut value = 3_i32;
        assert_eq!(flags_of(&copy(&value)), (true, false, true));
        assert_eq!(flags_of(&disown(&value)), (false, false, true));
        assert_eq!(flags_of(&clone(&value)), (true, false, false));
        assert_eq!(flags_of(&move_from(&mut value)), (true, true, true));
        assert_eq!(flags_of(&abandon(&mut value)), (false, true, true));
    }

    #[test]
    fn wrappers_report_their_operation() {
        assert_eq!(<Copied<'_, u8> as Semantic>::OPERATION, Operation::Share);
        assert_eq!(<Moved<'_, u8> as Semantic>::OPERATION, Operation::Steal);
        assert_eq!(
            <Abandoned<'_, u8> as Semantic>::OPERATION,
            Operation::Abandon
        );
        assert_eq!(<Disowned<'_, u8> as Semantic>::OPERATION, Operation::Disown);
        assert_eq!(<Cloned<'_, u8> as Semantic>::OPERATION, Operation::Deep);
    }

    #[test]
    fn wrapper_refers_to_source() {
        let text = String::from("source");
        let wrapped = copy(&text);
        assert!(std::ptr::eq(wrapped.value(), &text));

        let mut items = vec![1, 2, 3];
        let mut moved = move_from(&mut items);
        moved.value_mut().push(4);
        assert_eq!(moved.value().len(), 4);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn forward_keeps_tag_and_changes_payload() {
        let pair = (String::from("left"), 7_u64);
        let whole = clone(&pair);
        assert_eq!(whole.tag(), SemanticTag::Clone);
        let left = whole.forward(|p| &p.0);
        assert_eq!(left.tag(), SemanticTag::Clone);
        assert_eq!(left.value(), "left");

        let mut nested = (vec![1_u8, 2], 9_i16);
        let abandoned = abandon(&mut nested);
        let tail = abandoned.forward(|n| &mut n.1);
        assert_eq!(tail.tag(), SemanticTag::Abandon);
        *tail.into_inner() = 10;
        assert_eq!(nested.1, 10);
    }

    #[test]
    fn forward_into_unsized_payload() {
        let text = String::from("slice me");
        let whole = disown(&text);
        let view: Disowned<'_, str> = whole.forward(|s| s.as_str());
        assert_eq!(view.value(), "slice me");
        assert_eq!(view.tag(), SemanticTag::Disown);
    }

    fn nest_in_same_tag<'b, S: Semantic>(other: S::Source<'b, u16>) -> SemanticTag {
        let nested = S::nest(other);
        nested.tag()
    }

    #[test]
    fn nest_wraps_other_values_with_same_tag() {
        let mut other = 5_u16;
        assert_eq!(
            nest_in_same_tag::<Copied<'_, String>>(&other),
            SemanticTag::Copy
        );
        assert_eq!(
            nest_in_same_tag::<Cloned<'_, String>>(&other),
            SemanticTag::Clone
        );
        assert_eq!(
            nest_in_same_tag::<Moved<'_, String>>(&mut other),
            SemanticTag::Move
        );
        assert_eq!(
            nest_in_same_tag::<Abandoned<'_, String>>(&mut other),
            SemanticTag::Abandon
        );
    }
}
