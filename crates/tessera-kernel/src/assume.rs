//! Configurable runtime assumptions.
//!
//! Checks are tagged with the level at which they become active:
//!
//! - **User** assumptions guard public entry points fed by user input and
//!   are the most likely to fail.
//! - **Developer** assumptions guard inner implementation details and are
//!   only worth paying for while developing the framework itself.
//!
//! An [`Assumptions`] value carries the configured [`SafetyLevel`]; a check
//! runs only when its level does not exceed the configured one. Level zero
//! checks ([`Assumptions::assert`]) always run.

use crate::error::{Exception, ExceptionKind};
use serde::{Deserialize, Serialize};

/// How deep runtime assumption checking goes.
///
/// Off < User < Developer in strictness.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    /// No assumption is checked.
    #[default]
    Off,
    /// Checks on public interfaces exposed to user input.
    User,
    /// Checks on inner functions as well.
    Developer,
}

/// Level of assumptions about values coming from users of an API.
pub const USER_ASSUMES: SafetyLevel = SafetyLevel::User;

/// Level of assumptions internal to an implementation.
pub const DEV_ASSUMES: SafetyLevel = SafetyLevel::Developer;

impl SafetyLevel {
    /// Returns true if checks tagged with `check` run at this level.
    pub fn enables(self, check: SafetyLevel) -> bool {
        check <= self
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::User => write!(f, "user"),
            Self::Developer => write!(f, "developer"),
        }
    }
}

impl std::str::FromStr for SafetyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "0" => Ok(Self::Off),
            "user" | "1" => Ok(Self::User),
            "developer" | "dev" | "2" => Ok(Self::Developer),
            _ => Err(format!("unknown safety level: {s}")),
        }
    }
}

/// Assumption checker bound to a configured [`SafetyLevel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assumptions {
    level: SafetyLevel,
}

impl Assumptions {
    pub const fn new(level: SafetyLevel) -> Self {
        Self { level }
    }

    /// Checker that skips every leveled assumption.
    pub const fn unchecked() -> Self {
        Self::new(SafetyLevel::Off)
    }

    pub fn level(&self) -> SafetyLevel {
        self.level
    }

    /// Check `condition` if `check` is enabled at the configured level.
    ///
    /// A failing check raises [`ExceptionKind::Assertion`] located at the
    /// caller. Disabled checks always succeed without evaluating anything
    /// further.
    #[track_caller]
    pub fn assume(
        &self,
        check: SafetyLevel,
        condition: bool,
        message: &str,
    ) -> Result<(), Exception> {
        if check == SafetyLevel::Off || !self.level.enables(check) || condition {
            return Ok(());
        }
        let exception = Exception::assertion(message);
        tracing::warn!(
            check_level = %check,
            location = %exception.location(),
            "assumption failed: {message}"
        );
        Err(exception)
    }

    /// Always-on check raising an exception of the given kind.
    #[track_caller]
    pub fn assert(
        &self,
        condition: bool,
        kind: ExceptionKind,
        message: &str,
    ) -> Result<(), Exception> {
        if condition {
            return Ok(());
        }
        let exception = Exception::new(kind, message);
        tracing::warn!(
            kind = %kind,
            location = %exception.location(),
            "assertion failed: {message}"
        );
        Err(exception)
    }
}

impl From<SafetyLevel> for Assumptions {
    fn from(level: SafetyLevel) -> Self {
        Self::new(level)
    }
}
