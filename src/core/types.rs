//! core::types
//!
//! Identity types for the targeted tenant scope and the authenticated user.
//!
//! # Types
//!
//! - [`User`] - The authenticated user
//! - [`Organization`] - A targeted organization (GUID + name)
//! - [`Space`] - A targeted space (GUID + name)
//!
//! The default values of [`Organization`] and [`Space`] (empty GUID and
//! name) stand for "nothing targeted" when read through
//! [`crate::engine::gate::ReadyContext`].

use serde::Deserialize;

/// The authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    /// User name as shown in intent messages.
    pub name: String,
}

impl User {
    /// Create a user with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A targeted organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Organization {
    /// Platform GUID.
    pub guid: String,
    /// Display name.
    pub name: String,
}

impl Organization {
    /// Create an organization reference.
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }

    /// Check if this reference identifies anything.
    pub fn is_set(&self) -> bool {
        !self.guid.is_empty() || !self.name.is_empty()
    }
}

/// A targeted space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Space {
    /// Platform GUID.
    pub guid: String,
    /// Display name.
    pub name: String,
}

impl Space {
    /// Create a space reference.
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }

    /// Check if this reference identifies anything.
    pub fn is_set(&self) -> bool {
        !self.guid.is_empty() || !self.name.is_empty()
    }
}
