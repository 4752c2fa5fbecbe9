//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The client keeps a single user-level config file holding the API
//! endpoint, the authenticated session, and the targeted organization and
//! space. Commands never write it; it is read once per invocation and
//! turned into an immutable [`crate::core::session::Session`].
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$CFW_CONFIG` if set (used exclusively, even when missing)
//! 2. `$XDG_CONFIG_HOME/cfw/config.toml`
//! 3. `~/.cfw/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use cfwork::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! if let Some(api) = config.api_url() {
//!     println!("API endpoint: {}", api);
//! }
//! println!("Logged in: {}", config.access_token().is_some());
//! ```

pub mod schema;

pub use schema::{ApiConfig, ClientConfig, SessionConfig, TargetConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::{Organization, Space};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CFW_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessor methods apply defaults so callers never deal with the
/// optional layering of the schema.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub client: ClientConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Create a config from already-parsed contents.
    pub fn new(client: ClientConfig) -> Self {
        Self { client, path: None }
    }

    /// Load configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Config, ConfigError> {
        match locate(|key| std::env::var(key).ok(), dirs::home_dir()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let client: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        client.validate()?;

        Ok(Config {
            client,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Get the API endpoint URL, without a trailing slash.
    pub fn api_url(&self) -> Option<&str> {
        self.client
            .api
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }

    /// Check if TLS certificate validation is disabled.
    ///
    /// Defaults to `false`.
    pub fn skip_ssl_validation(&self) -> bool {
        self.client
            .api
            .as_ref()
            .and_then(|a| a.skip_ssl_validation)
            .unwrap_or(false)
    }

    /// Get the logged-in user's name.
    pub fn user(&self) -> Option<&str> {
        self.client
            .session
            .as_ref()
            .and_then(|s| s.user.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Get the access token.
    pub fn access_token(&self) -> Option<&str> {
        self.client
            .session
            .as_ref()
            .and_then(|s| s.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Get the targeted organization.
    pub fn targeted_organization(&self) -> Option<&Organization> {
        self.client
            .target
            .as_ref()
            .and_then(|t| t.organization.as_ref())
            .filter(|o| o.is_set())
    }

    /// Get the targeted space.
    pub fn targeted_space(&self) -> Option<&Space> {
        self.client
            .target
            .as_ref()
            .and_then(|t| t.space.as_ref())
            .filter(|s| s.is_set())
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Resolve the config file location.
///
/// `env` looks up environment variables; `home` is the user's home
/// directory. Returns `None` when no candidate applies.
pub fn locate(env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    if let Some(xdg_home) = env("XDG_CONFIG_HOME").filter(|p| !p.is_empty()) {
        let path = PathBuf::from(xdg_home).join("cfw/config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    home.map(|h| h.join(".cfw/config.toml"))
}
