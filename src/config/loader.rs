use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{Registry, RegistryError};
use crate::config::types::RegistrySpec;

/// Errors that can occur when loading a registry description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read registry file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Registry validation failed: {message}")]
    ValidationError { message: String },

    #[error("Registry rejected: {0}")]
    Registry(#[from] RegistryError),
}

impl RegistrySpec {
    /// Returns the default path of the registry description.
    ///
    /// Uses `~/.config/scmdp/registry.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scmdp").join("registry.toml")
    }

    /// Loads the registry description from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Loads and validates a registry description from `path`.
    ///
    /// Unlike application settings there is no useful default, so a missing
    /// file is a read error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let spec: RegistrySpec = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        spec.validate()?;
        tracing::debug!(
            path = %path.display(),
            positional = spec.positional.len(),
            optional = spec.optional.len(),
            "registry description loaded"
        );
        Ok(spec)
    }

    /// Validates the description.
    ///
    /// Checks:
    /// - Every positional has a name
    /// - Every optional has at least one key
    /// - Keys don't collide (by building the registry)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.positional.iter().position(|p| p.key.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Positional argument #{} has an empty key", index + 1),
            });
        }

        if let Some(index) = self
            .optional
            .iter()
            .position(|o| o.long.is_empty() && o.short.is_empty())
        {
            return Err(ConfigError::ValidationError {
                message: format!("Optional argument #{} has neither a long nor a short key", index + 1),
            });
        }

        self.build().map(|_| ())
    }

    /// Build a registry from the description.
    ///
    /// The help trigger is registered first so option keys are checked
    /// against it.
    pub fn build(&self) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new(&self.program.usage, &self.program.description)
            .with_layout(self.layout);

        if let Some(help) = &self.help {
            registry.set_help_trigger(&help.long, &help.short)?;
        }
        for arg in &self.positional {
            registry.add_positional(&arg.key, &arg.help)?;
        }
        for arg in &self.optional {
            registry.add_optional(&arg.long, &arg.short, &arg.help, &arg.value)?;
        }
        Ok(registry)
    }
}
