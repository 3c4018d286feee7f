//! Kernel configuration.
//!
//! Loaded from TOML; every table and field is optional:
//!
//! ```toml
//! [assumptions]
//! level = "user"
//! ```
//!
//! The `TESSERA_SAFETY_LEVEL` environment variable overrides the file.

use crate::assume::{Assumptions, SafetyLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding `[assumptions] level`.
pub const SAFETY_LEVEL_ENV: &str = "TESSERA_SAFETY_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid safety level: {0}")]
    InvalidLevel(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssumptionConfig {
    pub level: SafetyLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    pub assumptions: AssumptionConfig,
}

impl KernelConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: shown.clone(),
            source,
        })?;
        let config = Self::parse(&text, &shown)?;
        tracing::debug!(
            path = %shown,
            safety_level = %config.assumptions.level,
            "loaded kernel config"
        );
        Ok(config)
    }

    /// Apply `TESSERA_SAFETY_LEVEL` when it is set.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        match std::env::var(SAFETY_LEVEL_ENV) {
            Ok(raw) => self.with_level_override(Some(&raw)),
            Err(_) => Ok(self),
        }
    }

    /// Replace the configured safety level with a textual override.
    pub fn with_level_override(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = raw {
            self.assumptions.level = raw.parse().map_err(ConfigError::InvalidLevel)?;
        }
        Ok(self)
    }

    pub fn assumptions(&self) -> Assumptions {
        Assumptions::new(self.assumptions.level)
    }

    fn parse(text: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: path.to_string(),
            source,
        })
    }
}
