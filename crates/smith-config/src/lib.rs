//! # smith-config
//!
//! Layered configuration loading for testsmith using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TESTSMITH_*` prefix, `__` as separator)
//! 2. Project-level `.testsmith/config.toml`
//! 3. User-level `~/.config/testsmith/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TESTSMITH_OUTPUT__DIR` -> `output.dir`,
//! `TESTSMITH_TEMPLATE__PATH` -> `template.path`, and so on.
//!
//! ```no_run
//! use smith_config::SmithConfig;
//!
//! let config = SmithConfig::load_with_dotenv().expect("config");
//! println!("writing tests to {}", config.output.dir);
//! ```

mod error;
mod generation;
mod output;
mod template;

pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use output::{OutputConfig, test_file_name};
pub use template::TemplateConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmithConfig {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl SmithConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".testsmith/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TESTSMITH_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("testsmith").join("config.toml"))
    }
}
