//! # Tessera Kernel
//!
//! The shared vocabulary of the Tessera crates: the fixed-width [`Hash`]
//! fingerprint, the [`Exception`] taxonomy, and the runtime
//! [`Assumptions`] that replace compile-time safety macros with an explicit
//! configuration value.
//!
//! Nothing in here allocates on the hot path or holds global state.
//!
//! ## Architecture
//!
//! ```text
//! KernelConfig          ← TOML / environment configuration
//!     │
//! Assumptions           ← SafetyLevel gate for runtime checks
//!     │
//! Exception             ← What a failed check (or consumer) raises
//!
//! Hash                  ← Opaque 64-bit fingerprint, produced by tessera-hash
//! ```

pub mod assume;
pub mod config;
pub mod error;
pub mod hash;

pub use assume::{Assumptions, DEV_ASSUMES, SafetyLevel, USER_ASSUMES};
pub use config::{AssumptionConfig, ConfigError, KernelConfig, SAFETY_LEVEL_ENV};
pub use error::{Exception, ExceptionKind};
pub use hash::Hash;
