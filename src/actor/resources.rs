//! actor::resources
//!
//! Platform resources as seen by commands.

use std::fmt;

/// A space resolved through the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    /// Space GUID
    pub guid: String,
    /// Space name
    pub name: String,
    /// GUID of the owning organization
    pub organization_guid: String,
}

/// Desired state of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplicationState {
    /// Running (or supposed to be running)
    Started,
    /// Not running
    #[default]
    Stopped,
}

impl ApplicationState {
    /// Parse the platform's state string.
    pub fn parse(state: &str) -> Self {
        if state.eq_ignore_ascii_case("STARTED") {
            ApplicationState::Started
        } else {
            ApplicationState::Stopped
        }
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationState::Started => write!(f, "STARTED"),
            ApplicationState::Stopped => write!(f, "STOPPED"),
        }
    }
}

/// An application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    /// App GUID
    pub guid: String,
    /// App name
    pub name: String,
    /// Desired state
    pub state: ApplicationState,
}

impl Application {
    /// Check if the app is already started.
    pub fn is_started(&self) -> bool {
        self.state == ApplicationState::Started
    }
}

/// Downloaded droplet bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Droplet {
    /// Droplet GUID
    pub guid: String,
    /// Raw tarball contents
    pub bits: Vec<u8>,
}
