//! API key loading.
//!
//! The key is resolved once at startup through a chain of providers (explicit
//! value, environment variable, TOML secrets file) and handed to the client.
//! Nothing is cached process-wide.

mod file;

#[cfg(test)]
mod tests;

use log::debug;

use crate::config::{Config, API_KEY_ENV};
use crate::error_handling::ConfigurationError;

pub use file::TomlSecretsFile;

/// Source of the WhoisJSON API key.
pub trait SecretsProvider {
    /// Short description used in logs.
    fn name(&self) -> String;

    /// Returns the key, `Ok(None)` when this source does not define one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the source exists but cannot be read.
    fn api_key(&self) -> Result<Option<String>, ConfigurationError>;
}

/// Keeps only non-blank keys, trimmed.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A key supplied directly (e.g. `--api-key`).
#[derive(Debug, Clone)]
pub struct StaticSecret(Option<String>);

impl StaticSecret {
    /// Wraps an optional explicit key.
    pub fn new(value: Option<String>) -> Self {
        Self(value)
    }
}

impl SecretsProvider for StaticSecret {
    fn name(&self) -> String {
        "command line".to_string()
    }

    fn api_key(&self) -> Result<Option<String>, ConfigurationError> {
        Ok(non_blank(self.0.clone()))
    }
}

/// A key read from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvSecrets {
    var: String,
}

impl EnvSecrets {
    /// Provider reading the variable `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecrets {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl SecretsProvider for EnvSecrets {
    fn name(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn api_key(&self) -> Result<Option<String>, ConfigurationError> {
        Ok(non_blank(std::env::var(&self.var).ok()))
    }
}

/// Providers consulted in order; the first non-blank key wins.
pub struct ChainedSecrets {
    providers: Vec<Box<dyn SecretsProvider>>,
    secrets_file: String,
}

impl ChainedSecrets {
    /// Chain over `providers`; `secrets_file` is named in the missing-key error.
    pub fn new(providers: Vec<Box<dyn SecretsProvider>>, secrets_file: impl Into<String>) -> Self {
        Self {
            providers,
            secrets_file: secrets_file.into(),
        }
    }

    /// Standard chain: explicit key, then `WHOISJSON_API_KEY`, then the secrets file.
    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_env(config, API_KEY_ENV)
    }

    /// Standard chain reading the key from the environment variable `env_var`.
    pub fn from_config_with_env(config: &Config, env_var: &str) -> Self {
        Self::new(
            vec![
                Box::new(StaticSecret::new(config.api_key.clone())),
                Box::new(EnvSecrets::new(env_var)),
                Box::new(TomlSecretsFile::new(&config.secrets_file)),
            ],
            config.secrets_file.display().to_string(),
        )
    }

    /// Resolves the key or fails with `ConfigurationError::MissingApiKey`.
    pub fn require_api_key(&self) -> Result<String, ConfigurationError> {
        self.api_key()?
            .ok_or_else(|| ConfigurationError::MissingApiKey {
                secrets_file: self.secrets_file.clone(),
            })
    }
}

impl SecretsProvider for ChainedSecrets {
    fn name(&self) -> String {
        let names: Vec<String> = self.providers.iter().map(|p| p.name()).collect();
        names.join(", ")
    }

    fn api_key(&self) -> Result<Option<String>, ConfigurationError> {
        for provider in &self.providers {
            if let Some(key) = provider.api_key()? {
                debug!("API key loaded from {}", provider.name());
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}
