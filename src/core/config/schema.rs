//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Config File
//!
//! Located at (in order of precedence):
//! 1. `$CFW_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/cfw/config.toml`
//! 3. `~/.cfw/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing: the API URL must be an
//! http(s) URL, every target carries a GUID, and a targeted space requires
//! a targeted organization.

use serde::Deserialize;

use super::ConfigError;
use crate::core::types::{Organization, Space};

/// Client configuration (user scope).
///
/// # Example
///
/// ```toml
/// [api]
/// url = "https://api.example.com"
/// skip_ssl_validation = false
///
/// [session]
/// user = "steve"
/// access_token = "eyJhbGciOi..."
///
/// [target.organization]
/// guid = "0f1f4a6c-org"
/// name = "some-org"
///
/// [target.space]
/// guid = "3b2e9d10-space"
/// name = "some-space"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// API endpoint settings
    pub api: Option<ApiConfig>,

    /// Authenticated session
    pub session: Option<SessionConfig>,

    /// Targeted organization and space
    pub target: Option<TargetConfig>,
}

impl ClientConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(api) = &self.api {
            api.validate()?;
        }
        if let Some(target) = &self.target {
            target.validate()?;
        }
        Ok(())
    }
}

/// API endpoint settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the platform API
    pub url: Option<String>,

    /// Accept invalid TLS certificates
    pub skip_ssl_validation: Option<bool>,
}

impl ApiConfig {
    /// Validate the API settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid api url '{}', must start with http:// or https://",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Authenticated session state.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Name of the logged-in user
    pub user: Option<String>,

    /// Bearer token for API requests
    pub access_token: Option<String>,
}

/// Targeted organization and space.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Targeted organization
    pub organization: Option<Organization>,

    /// Targeted space (requires an organization)
    pub space: Option<Space>,
}

impl TargetConfig {
    /// Validate the target.
    ///
    /// Every organization or space that is set must carry a GUID; commands
    /// address the platform by GUID only.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let org = self.organization.as_ref().filter(|o| o.is_set());
        let space = self.space.as_ref().filter(|s| s.is_set());

        if let Some(org) = org.filter(|o| o.guid.is_empty()) {
            return Err(ConfigError::InvalidValue(format!(
                "targeted organization '{}' has no guid",
                org.name
            )));
        }
        if let Some(space) = space.filter(|s| s.guid.is_empty()) {
            return Err(ConfigError::InvalidValue(format!(
                "targeted space '{}' has no guid",
                space.name
            )));
        }
        if space.is_some() && org.is_none() {
            return Err(ConfigError::InvalidValue(
                "a targeted space requires a targeted organization".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod client_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = ClientConfig::default();
            assert!(config.api.is_none());
            assert!(config.session.is_none());
            assert!(config.target.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn parses_full_file() {
            let toml = r#"
                [api]
                url = "https://api.example.com"
                skip_ssl_validation = true

                [session]
                user = "steve"
                access_token = "token"

                [target.organization]
                guid = "org-guid"
                name = "some-org"

                [target.space]
                guid = "space-guid"
                name = "some-space"
            "#;

            let config: ClientConfig = toml::from_str(toml).unwrap();
            assert!(config.validate().is_ok());
            let target = config.target.unwrap();
            assert_eq!(target.organization.unwrap().name, "some-org");
            assert_eq!(target.space.unwrap().guid, "space-guid");
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                [session]
                user = "steve"
                password = "hunter2"
            "#;

            let result: Result<ClientConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }
    }

    mod api_config {
        use super::*;

        #[test]
        fn https_accepted() {
            let api = ApiConfig {
                url: Some("https://api.example.com".to_string()),
                ..Default::default()
            };
            assert!(api.validate().is_ok());
        }

        #[test]
        fn non_http_rejected() {
            let api = ApiConfig {
                url: Some("ftp://api.example.com".to_string()),
                ..Default::default()
            };
            assert!(api.validate().is_err());
        }
    }

    mod target_config {
        use super::*;

        #[test]
        fn space_without_org_rejected() {
            let target = TargetConfig {
                organization: None,
                space: Some(Space::new("s", "some-space")),
            };
            assert!(target.validate().is_err());
        }

        #[test]
        fn org_without_guid_rejected() {
            let target = TargetConfig {
                organization: Some(Organization::new("", "some-org")),
                space: None,
            };
            let err = target.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid config value: targeted organization 'some-org' has no guid"
            );
        }

        #[test]
        fn space_without_guid_rejected() {
            let target = TargetConfig {
                organization: Some(Organization::new("o", "some-org")),
                space: Some(Space::new("", "some-space")),
            };
            assert!(target.validate().is_err());
        }

        #[test]
        fn empty_tables_accepted() {
            let target = TargetConfig {
                organization: Some(Organization::default()),
                space: Some(Space::default()),
            };
            assert!(target.validate().is_ok());
        }

        #[test]
        fn org_without_space_accepted() {
            let target = TargetConfig {
                organization: Some(Organization::new("o", "some-org")),
                space: None,
            };
            assert!(target.validate().is_ok());
        }
    }
}
