//! actor::errors
//!
//! Errors returned by actor operations.
//!
//! Resource-not-found errors name the resource the user asked for. Any
//! other failure is an [`ApiError`] passed through unchanged.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from actor operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// No app with this name exists in the space.
    #[error("App '{name}' not found")]
    ApplicationNotFound {
        /// Requested app name
        name: String,
    },

    /// No space with this name exists in the organization.
    #[error("Space '{name}' not found.")]
    SpaceNotFound {
        /// Requested space name
        name: String,
    },

    /// No isolation segment with this name exists.
    #[error("Isolation segment '{name}' not found.")]
    IsolationSegmentNotFound {
        /// Requested segment name
        name: String,
    },

    /// No domain with this name exists.
    #[error("Domain '{name}' not found.")]
    DomainNotFound {
        /// Requested domain name
        name: String,
    },

    /// The app exists but has no current droplet.
    #[error("App '{app}' does not have a current droplet.")]
    NoCurrentDroplet {
        /// App name
        app: String,
    },

    /// Any other backend failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}
