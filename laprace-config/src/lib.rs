//! # laprace Configuration System
//!
//! Layered configuration for the lap race simulator.
//!
//! ## Features
//! - **Unified Configuration**: One document for race, rules and telemetry settings
//! - **Validation**: Range and consistency checks before anything runs
//! - **Environment Awareness**: Per-environment files and `LAPRACE_*` overrides

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod race;
mod rules;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use race::RaceConfig;
pub use rules::{RuleKind, RulesConfig};
pub use telemetry::TelemetryConfig;

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct LapraceConfig {
    /// Lap count and interactive input settings.
    #[serde(default)]
    #[validate(nested)]
    pub race: RaceConfig,

    /// Advancement rule selection.
    #[serde(default)]
    #[validate(nested)]
    pub rules: RulesConfig,

    /// Logging and metrics.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl LapraceConfig {
    /// Load configuration from the `config/` directory and environment.
    ///
    /// Hierarchy:
    /// 1. Default Values
    /// 2. `config/laprace.yaml` - Base settings. If missing, defaults are used.
    /// 3. `config/<LAPRACE_ENV>.yaml` - Environment‑specific overrides.
    /// 4. `LAPRACE_*` environment variables, `__` separating sections.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir("config")
    }

    /// Same hierarchy as [`LapraceConfig::load`], rooted at `dir`.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let mut figment = Figment::from(Serialized::defaults(LapraceConfig::default()));

        let base = dir.join("laprace.yaml");
        if base.exists() {
            figment = figment.merge(Yaml::file(base));
        }

        if let Ok(env) = std::env::var("LAPRACE_ENV") {
            let env_file = dir.join(format!("{env}.yaml"));
            if env_file.exists() {
                figment = figment.merge(Yaml::file(env_file));
            }
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific file, then apply environment
    /// overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let figment = Figment::from(Serialized::defaults(LapraceConfig::default()))
            .merge(Yaml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed("LAPRACE_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
