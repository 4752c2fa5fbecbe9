//! engine::gate
//!
//! Target and authentication gating for command execution.
//!
//! # Architecture
//!
//! Each command declares a [`TargetRequirement`]. Before any actor call,
//! the runner checks it against the session with [`check_target`], then
//! resolves the current user with [`current_user`]. Only when both pass
//! does the command receive a [`ReadyContext`].
//!
//! # Invariants
//!
//! - Gating never produces a `ReadyContext` when requirements are not met
//! - Gating is a pure predicate over the session: same session, same answer
//! - Requiring a space implies requiring an organization
//!
//! # Example
//!
//! ```
//! use cfwork::core::session::Session;
//! use cfwork::engine::gate::{check_target, requirements, TargetError};
//!
//! let session = Session::builder()
//!     .logged_in_as("steve")
//!     .organization("org-guid", "some-org")
//!     .build();
//!
//! assert!(check_target(&session, &requirements::ORGANIZATION).is_ok());
//! assert!(matches!(
//!     check_target(&session, &requirements::SPACE),
//!     Err(TargetError::NoSpaceTargeted { .. })
//! ));
//! ```

use thiserror::Error;

use crate::core::session::Session;
use crate::core::types::{Organization, Space, User};

/// What a command needs targeted before it may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRequirement {
    /// Human-readable name for this requirement.
    pub name: &'static str,
    /// An organization must be targeted.
    pub organization: bool,
    /// A space must be targeted.
    pub space: bool,
}

impl TargetRequirement {
    /// Create a new requirement.
    pub const fn new(name: &'static str, organization: bool, space: bool) -> Self {
        Self {
            name,
            organization,
            space,
        }
    }

    /// Check if an organization is needed, directly or through the space.
    pub fn needs_organization(&self) -> bool {
        self.organization || self.space
    }
}

/// Predefined requirements for common command categories.
pub mod requirements {
    use super::TargetRequirement;

    /// Logged in, nothing targeted.
    pub const LOGGED_IN: TargetRequirement = TargetRequirement::new("logged-in", false, false);

    /// Logged in with an organization targeted (check-route,
    /// set-space-isolation-segment).
    pub const ORGANIZATION: TargetRequirement =
        TargetRequirement::new("organization", true, false);

    /// Logged in with an organization and space targeted (start,
    /// download-droplet).
    pub const SPACE: TargetRequirement = TargetRequirement::new("space", true, true);
}

/// Precondition failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TargetError {
    /// No authenticated user.
    #[error("Not logged in. Use '{binary} login' to log in.")]
    NotLoggedIn {
        /// Binary name for the hint
        binary: String,
    },

    /// No organization targeted.
    #[error("No org targeted, use '{binary} target -o ORG' to target an org.")]
    NoOrganizationTargeted {
        /// Binary name for the hint
        binary: String,
    },

    /// No space targeted.
    #[error("No space targeted, use '{binary} target -s SPACE' to target a space.")]
    NoSpaceTargeted {
        /// Binary name for the hint
        binary: String,
    },
}

/// Check the session against `requirement`.
///
/// Checks run in order: logged in, organization, space.
pub fn check_target(session: &Session, requirement: &TargetRequirement) -> Result<(), TargetError> {
    let binary = || session.binary_name().to_string();

    if !session.is_logged_in() {
        return Err(TargetError::NotLoggedIn { binary: binary() });
    }

    if requirement.needs_organization() && session.organization().is_none() {
        return Err(TargetError::NoOrganizationTargeted { binary: binary() });
    }

    if requirement.space && session.space().is_none() {
        return Err(TargetError::NoSpaceTargeted { binary: binary() });
    }

    Ok(())
}

/// Resolve the user the session is authenticated as.
pub fn current_user(session: &Session) -> Result<User, TargetError> {
    session
        .user()
        .filter(|user| !user.name.is_empty())
        .cloned()
        .ok_or_else(|| TargetError::NotLoggedIn {
            binary: session.binary_name().to_string(),
        })
}

/// Validated context handed to a command after gating.
///
/// Organization and space are empty values when the command's requirement
/// does not include them and they are not targeted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyContext {
    /// The authenticated user.
    pub user: User,
    /// The targeted organization.
    pub organization: Organization,
    /// The targeted space.
    pub space: Space,
}

impl ReadyContext {
    /// Build the context from a gated session and its current user.
    pub fn new(user: User, session: &Session) -> Self {
        Self {
            user,
            organization: session.organization().cloned().unwrap_or_default(),
            space: session.space().cloned().unwrap_or_default(),
        }
    }
}
