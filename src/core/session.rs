//! core::session
//!
//! Immutable per-invocation view of the session.
//!
//! # Design
//!
//! A [`Session`] is built by the dispatcher before any command is set up
//! and is only ever borrowed afterwards. Nothing in a command's lifecycle
//! can change the targeted organization, space, or user.

use super::config::Config;
use super::types::{Organization, Space, User};

/// Default binary name used in user-facing hints.
pub const DEFAULT_BINARY_NAME: &str = "cfw";

/// Read-only session context for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    binary_name: String,
    api_url: Option<String>,
    skip_ssl_validation: bool,
    access_token: Option<String>,
    user: Option<User>,
    organization: Option<Organization>,
    space: Option<Space>,
}

impl Session {
    /// Build a session from loaded configuration.
    pub fn from_config(config: &Config, binary_name: impl Into<String>) -> Self {
        Self {
            binary_name: binary_name.into(),
            api_url: config.api_url().map(str::to_string),
            skip_ssl_validation: config.skip_ssl_validation(),
            access_token: config.access_token().map(str::to_string),
            user: config.user().map(User::new),
            organization: config.targeted_organization().cloned(),
            space: config.targeted_space().cloned(),
        }
    }

    /// Start building a session by hand.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Name of the running binary, for hints like `cfw login`.
    pub fn binary_name(&self) -> &str {
        if self.binary_name.is_empty() {
            DEFAULT_BINARY_NAME
        } else {
            &self.binary_name
        }
    }

    /// API endpoint, if one is set.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Whether TLS certificate validation is disabled.
    pub fn skip_ssl_validation(&self) -> bool {
        self.skip_ssl_validation
    }

    /// Bearer token, if logged in.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Check if the session carries credentials.
    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// The authenticated user, if known.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The targeted organization, if any.
    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    /// The targeted space, if any.
    pub fn space(&self) -> Option<&Space> {
        self.space.as_ref()
    }
}

/// Builder for [`Session`], mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    /// Set the binary name.
    pub fn binary_name(mut self, name: impl Into<String>) -> Self {
        self.session.binary_name = name.into();
        self
    }

    /// Set the API endpoint.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.session.api_url = Some(url.into());
        self
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.session.access_token = Some(token.into());
        self
    }

    /// Set the authenticated user.
    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.session.user = Some(User::new(name));
        self
    }

    /// Log in as `name` with a placeholder token.
    pub fn logged_in_as(self, name: impl Into<String>) -> Self {
        self.access_token("test-token").user(name)
    }

    /// Target an organization.
    pub fn organization(mut self, guid: impl Into<String>, name: impl Into<String>) -> Self {
        self.session.organization = Some(Organization::new(guid, name));
        self
    }

    /// Target a space.
    pub fn space(mut self, guid: impl Into<String>, name: impl Into<String>) -> Self {
        self.session.space = Some(Space::new(guid, name));
        self
    }

    /// Finish building.
    pub fn build(self) -> Session {
        self.session
    }
}
