//! Configuration and credential management for the AccessHub client
//!
//! Two records are persisted under `~/.accessops/`: a config file holding
//! the chosen API host and default principal, and a separate credential
//! store mapping principal email to API key. The key file is written with
//! 0600 permissions on Unix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Fixed token substituted for the API key in all diagnostic output.
pub const REDACTED: &str = "********";

/// An AccessHub API key.
///
/// Wraps the raw secret so it can never leak through `Debug` or `Display`;
/// only the request executor reads the raw value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for constructing the Authorization header.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({REDACTED})")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// A resolved (principal, secret, host) triple.
///
/// Resolved once per operation invocation; never persisted by this type.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Principal email the service authenticates as
    pub principal: String,

    /// API key for the principal
    pub secret: ApiKey,

    /// Base URL of the service, e.g. `https://hub.example.com`
    pub host: String,
}

impl Credential {
    /// Resolve a credential: an explicitly supplied one wins, otherwise the
    /// persisted config and credential store are consulted. No credential
    /// from either source is fatal.
    pub fn resolve(explicit: Option<Credential>) -> Result<Credential> {
        if let Some(cred) = explicit {
            return Ok(cred);
        }

        let config = Config::load()?;
        let host = config.host.ok_or(ConfigError::MissingHost)?;
        let principal = config
            .principal
            .ok_or(ConfigError::MissingCredential)?;

        let store = CredentialStore::load()?;
        let secret = store
            .key_for(&principal)
            .ok_or(ConfigError::MissingCredential)?;

        Ok(Credential {
            principal,
            secret,
            host,
        })
    }
}

/// Persisted client configuration (host + default principal)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the AccessHub service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Default principal email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.yaml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&path, &contents)
    }
}

/// Persisted credential store: principal email -> API key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    #[serde(default)]
    keys: BTreeMap<String, ApiKey>,
}

impl CredentialStore {
    /// Get the default credential store path
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("credentials.yaml"))
    }

    /// Load the store from the default path. A missing file is an empty
    /// store, not an error: the caller decides whether a missing key is fatal.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load the store from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let store: CredentialStore =
            serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(store)
    }

    /// Save the store to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save the store to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&path, &contents)
    }

    /// Look up the API key for a principal
    pub fn key_for(&self, principal: &str) -> Option<ApiKey> {
        self.keys.get(principal).cloned()
    }

    /// Insert or replace the API key for a principal
    pub fn set_key(&mut self, principal: impl Into<String>, key: ApiKey) {
        self.keys.insert(principal.into(), key);
    }

    /// Remove the API key for a principal
    pub fn remove_key(&mut self, principal: &str) -> bool {
        self.keys.remove(principal).is_some()
    }
}

fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::Invalid(
        "Could not determine home directory".to_string(),
    ))?;
    Ok(home.join(".accessops"))
}

/// Write a file, creating parent directories and restricting permissions
/// to the owner on Unix.
fn write_private(path: &PathBuf, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}
