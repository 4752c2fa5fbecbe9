//! core::route
//!
//! Route descriptors and canonical route URL composition.
//!
//! # Route Modes
//!
//! A route is addressed in exactly one of two modes:
//!
//! - **Host mode**: `[hostname.]domain[/path]` (HTTP routes)
//! - **Port mode**: `domain:port` (TCP routes)
//!
//! [`RouteDescriptor::new`] rejects inputs that mix the two modes, so
//! [`compose_url`] never has to guess which one the caller meant.
//!
//! # Example
//!
//! ```
//! use cfwork::core::route::{compose_url, RouteDescriptor, RoutePath};
//!
//! assert_eq!(compose_url("example.com", "", "", 0), "example.com");
//! assert_eq!(compose_url("example.com", "myhost", "/foo", 0), "myhost.example.com/foo");
//! assert_eq!(compose_url("example.com", "", "", 5000), "example.com:5000");
//!
//! let route = RouteDescriptor::new(
//!     "example.com",
//!     Some("myhost".to_string()),
//!     Some(RoutePath::new("foo")),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(route.url(), "myhost.example.com/foo");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from route validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The domain was empty.
    #[error("route domain cannot be empty")]
    EmptyDomain,

    /// Port mode was combined with a hostname or path.
    #[error("a port cannot be combined with a hostname or path")]
    ConflictingModes,
}

/// Compose the canonical URL of a route.
///
/// A non-zero `port` selects port mode and the hostname and path are
/// ignored. Otherwise the hostname (if any) is prefixed to the domain and
/// the path (if any) is appended verbatim; the path carries its own
/// leading separator.
pub fn compose_url(domain: &str, hostname: &str, path: &str, port: u16) -> String {
    if port != 0 {
        return format!("{}:{}", domain, port);
    }

    let mut url = if hostname.is_empty() {
        domain.to_string()
    } else {
        format!("{}.{}", hostname, domain)
    };
    url.push_str(path);
    url
}

/// A route path as typed by the user, normalized to start with `/`.
///
/// An empty input stays empty (no path).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Create a route path, prepending `/` when missing.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() || path.starts_with('/') {
            Self(path)
        } else {
            Self(format!("/{}", path))
        }
    }

    /// Get the normalized path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if no path was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for RoutePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a route by its constituent parts.
///
/// Not persisted; built from command arguments and used both to query the
/// platform and to render messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    domain: String,
    hostname: Option<String>,
    path: Option<RoutePath>,
    port: Option<u16>,
}

impl RouteDescriptor {
    /// Create a validated route descriptor.
    ///
    /// Empty hostnames and paths are treated as absent, and a zero port is
    /// treated as no port.
    ///
    /// # Errors
    ///
    /// - `EmptyDomain` if `domain` is empty
    /// - `ConflictingModes` if a port is combined with a hostname or path
    pub fn new(
        domain: impl Into<String>,
        hostname: Option<String>,
        path: Option<RoutePath>,
        port: Option<u16>,
    ) -> Result<Self, RouteError> {
        let domain = domain.into();
        if domain.is_empty() {
            return Err(RouteError::EmptyDomain);
        }

        let hostname = hostname.filter(|h| !h.is_empty());
        let path = path.filter(|p| !p.is_empty());
        let port = port.filter(|p| *p != 0);

        if port.is_some() && (hostname.is_some() || path.is_some()) {
            return Err(RouteError::ConflictingModes);
        }

        Ok(Self {
            domain,
            hostname,
            path,
            port,
        })
    }

    /// The route's domain name.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The hostname, empty in port mode or when unset.
    pub fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or("")
    }

    /// The path, empty in port mode or when unset.
    pub fn path(&self) -> &str {
        self.path.as_ref().map(RoutePath::as_str).unwrap_or("")
    }

    /// The TCP port, if this is a port-mode route.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Check if this route is addressed by port.
    pub fn is_port_route(&self) -> bool {
        self.port.is_some()
    }

    /// The canonical URL of this route.
    pub fn url(&self) -> String {
        compose_url(
            &self.domain,
            self.hostname(),
            self.path(),
            self.port.unwrap_or(0),
        )
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
