//! # Tessera Semantics
//!
//! A caller declares *how* a value should be transferred into a new owner
//! by wrapping it in one of five semantic wrappers. Generic constructors
//! read the wrapper's static flags and select the cheapest correct
//! operation, with no runtime branching and no type erasure.
//!
//! ```text
//! copy / move_from / abandon / disown / clone     ← factories at the call site
//!     │
//! Copied · Moved · Abandoned · Disowned · Cloned  ← move-only borrow wrappers
//!     │
//! Semantic::construct                             ← static tag dispatch
//!     │
//! SemanticNew                                     ← consumer's per-operation hooks
//! ```
//!
//! ```
//! use tessera_semantics::{SemanticNew, abandon, copy, move_from};
//!
//! let mut source = vec![String::from("a"), String::from("b")];
//!
//! let shared = Vec::semantic_new(copy(&source));
//! assert_eq!(shared, source);
//!
//! let stolen = Vec::semantic_new(move_from(&mut source));
//! assert_eq!(stolen.len(), 2);
//! assert!(source.is_empty());
//!
//! let mut scratch = 5_u32;
//! let kept = u32::semantic_new(abandon(&mut scratch));
//! assert_eq!(kept, 5);
//! ```

pub mod construct;
pub mod tag;
pub mod transferable;
pub mod wrapper;

pub use construct::{SemanticAssign, SemanticNew};
pub use tag::{Operation, SemanticFlags, SemanticTag};
pub use transferable::Transferable;
pub use wrapper::{
    Abandoned, Cloned, Copied, Disowned, Moved, Semantic, abandon, clone, copy, disown, move_from,
};
