//! Credential management for the Gemini API key.
//!
//! Keys live in the system keyring, with environment variable fallback for
//! CI/deployment scenarios. Nothing is ever read from source.
//!
//! # Example
//!
//! ```ignore
//! use gemlist_models::auth::CredentialStore;
//!
//! let store = CredentialStore::new("gemlist").with_env_fallback();
//!
//! // Store a key in the system keyring
//! store.set("AIza...")?;
//!
//! // Retrieve it (checks keyring first, then env vars)
//! let key = store.get()?;
//! ```

use std::env;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::{Error, Result};

/// Keyring account name under which the key is stored.
pub const PROVIDER: &str = "google";

/// Environment variables checked in order when falling back.
pub const ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// A secure API key that prevents accidental logging.
///
/// The key is wrapped in `SecretString` which:
/// - Implements `Debug` as `"[REDACTED]"`
/// - Zeroizes memory on drop
/// - Requires explicit `.expose_secret()` to access the value
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create a new API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Expose the secret key value.
    ///
    /// Use sparingly - only when actually sending to an API.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the key is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Secure credential storage with system keyring and environment fallback.
///
/// # Storage Priority
///
/// When retrieving the key:
/// 1. System keyring (if available)
/// 2. An explicitly configured environment variable (see [`with_env_var`](Self::with_env_var))
/// 3. `GEMINI_API_KEY`, then `GOOGLE_API_KEY` (if `env_fallback` is enabled)
///
/// When storing credentials:
/// - Always uses system keyring
/// - Environment variables are read-only
pub struct CredentialStore {
    service_name: String,
    env_fallback: bool,
    env_override: Option<String>,
}

impl CredentialStore {
    /// Create a new credential store.
    ///
    /// # Arguments
    ///
    /// * `service_name` - Service identifier for keyring (e.g., "gemlist")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            env_fallback: false,
            env_override: None,
        }
    }

    /// Enable environment variable fallback.
    pub fn with_env_fallback(mut self) -> Self {
        self.env_fallback = true;
        self
    }

    /// Check this environment variable before the default ones.
    ///
    /// Implies env fallback.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_fallback = true;
        self.env_override = Some(name.into());
        self
    }

    /// Get the API key.
    ///
    /// # Errors
    ///
    /// Returns `Error::CredentialsNotFound` if no credentials are found.
    pub fn get(&self) -> Result<ApiKey> {
        if let Some(key) = self.get_from_keyring() {
            debug!(provider = PROVIDER, "retrieved API key from keyring");
            return Ok(key);
        }

        if self.env_fallback
            && let Some((var, key)) = self.get_from_env()
        {
            debug!(provider = PROVIDER, var = %var, "retrieved API key from environment");
            return Ok(key);
        }

        Err(Error::CredentialsNotFound(PROVIDER.to_string()))
    }

    /// Store the API key in the system keyring.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidApiKey` for a blank key and `Error::Keyring`
    /// if the keyring operation fails.
    pub fn set(&self, key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::InvalidApiKey);
        }
        let entry = self.keyring_entry()?;
        entry
            .set_password(key)
            .map_err(|e| Error::Keyring(e.to_string()))?;
        debug!(provider = PROVIDER, "stored API key in keyring");
        Ok(())
    }

    /// Delete the API key from the system keyring.
    ///
    /// # Errors
    ///
    /// Returns `Error::Keyring` if the keyring operation fails.
    /// Returns `Error::CredentialsNotFound` if no credentials exist.
    pub fn delete(&self) -> Result<()> {
        let entry = self.keyring_entry()?;
        entry.delete_credential().map_err(|e| match e {
            keyring::Error::NoEntry => Error::CredentialsNotFound(PROVIDER.to_string()),
            _ => Error::Keyring(e.to_string()),
        })?;
        debug!(provider = PROVIDER, "deleted API key from keyring");
        Ok(())
    }

    /// Get the source of the credential (keyring or env).
    pub fn source(&self) -> Option<CredentialSource> {
        if self.get_from_keyring().is_some() {
            Some(CredentialSource::Keyring)
        } else if self.env_fallback {
            self.get_from_env()
                .map(|(var, _)| CredentialSource::Environment(var))
        } else {
            None
        }
    }

    /// Environment variables consulted, in lookup order.
    pub fn env_vars(&self) -> Vec<String> {
        self.env_override
            .iter()
            .cloned()
            .chain(ENV_VARS.iter().map(|v| v.to_string()))
            .collect()
    }

    fn keyring_entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service_name, PROVIDER).map_err(|e| Error::Keyring(e.to_string()))
    }

    fn get_from_keyring(&self) -> Option<ApiKey> {
        let entry = self.keyring_entry().ok()?;
        entry.get_password().ok().map(ApiKey::new)
    }

    fn get_from_env(&self) -> Option<(String, ApiKey)> {
        self.env_vars().into_iter().find_map(|var| match env::var(&var) {
            Ok(value) if !value.trim().is_empty() => Some((var, ApiKey::new(value))),
            _ => None,
        })
    }
}

/// Source of a stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Stored in system keyring.
    Keyring,
    /// From the named environment variable.
    Environment(String),
}
