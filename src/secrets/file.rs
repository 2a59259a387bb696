//! TOML secrets file provider.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{non_blank, SecretsProvider};
use crate::config::{SECRETS_API_KEY, SECRETS_TABLE};
use crate::error_handling::ConfigurationError;

/// Reads `api_key` from the `[whoisjson]` table of a TOML file.
///
/// A missing file or missing table means "no key here"; an unreadable or
/// malformed file is a configuration error.
#[derive(Debug, Clone)]
pub struct TomlSecretsFile {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SecretsDocument {
    whoisjson: Option<WhoisJsonSecrets>,
}

#[derive(Debug, Deserialize)]
struct WhoisJsonSecrets {
    api_key: Option<String>,
}

impl TomlSecretsFile {
    /// Provider reading `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the secrets file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl ToString) -> ConfigurationError {
        ConfigurationError::SecretsFile {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl SecretsProvider for TomlSecretsFile {
    fn name(&self) -> String {
        format!(
            "secrets file {} ([{}] {})",
            self.path.display(),
            SECRETS_TABLE,
            SECRETS_API_KEY
        )
    }

    fn api_key(&self) -> Result<Option<String>, ConfigurationError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        let document: SecretsDocument = toml::from_str(&content).map_err(|e| self.error(e))?;
        Ok(non_blank(document.whoisjson.and_then(|s| s.api_key)))
    }
}
