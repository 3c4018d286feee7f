//! Exception taxonomy shared by the framework.
//!
//! The core itself never raises these on its own; they are the currency of
//! runtime assumption checks and of the containers built on top.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// Message used when the raiser provides none.
pub const NO_INFORMATION: &str = "<no information provided>";

/// The standard exception kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// A runtime assumption did not hold.
    Assertion,
    Copy,
    Clone,
    Move,
    Access,
    Convert,
    Allocate,
    Deallocate,
    Reallocate,
    Mutate,
    Construct,
    Destruct,
    Reference,
    Overflow,
    Underflow,
    ZeroDivision,
    OutOfRange,
}

impl ExceptionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assertion => "Assertion",
            Self::Copy => "Copy",
            Self::Clone => "Clone",
            Self::Move => "Move",
            Self::Access => "Access",
            Self::Convert => "Convert",
            Self::Allocate => "Allocate",
            Self::Deallocate => "Deallocate",
            Self::Reallocate => "Reallocate",
            Self::Mutate => "Mutate",
            Self::Construct => "Construct",
            Self::Destruct => "Destruct",
            Self::Reference => "Reference",
            Self::Overflow => "Overflow",
            Self::Underflow => "Underflow",
            Self::ZeroDivision => "ZeroDivision",
            Self::OutOfRange => "OutOfRange",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raised exception: kind, message, and the source location that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} exception at {location}: {message}")]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
    location: &'static Location<'static>,
}

impl Exception {
    /// Raise an exception of `kind`, recording the caller's location.
    #[track_caller]
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// Raise an exception of `kind` without a message.
    #[track_caller]
    pub fn bare(kind: ExceptionKind) -> Self {
        Self::new(kind, NO_INFORMATION)
    }

    #[track_caller]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Assertion, message)
    }

    #[track_caller]
    pub fn convert(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Convert, message)
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Name of the exception kind, e.g. `"OutOfRange"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}
