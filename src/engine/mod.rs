//! engine
//!
//! Orchestrates the command lifecycle: Setup -> Gate -> Execute.
//!
//! # Architecture
//!
//! The engine is the central coordinator for every command. It enforces
//! the same sequence for all of them:
//!
//! 1. **Setup**: wire actors from the session
//! 2. **Gate**: check target requirements and resolve the current user
//! 3. **Execute**: run the command's ordered actor calls
//!
//! # Command Lifecycle
//!
//! ```text
//! Created -> Configured -> TargetChecked -> AuthChecked -> Executing -> Succeeded | Failed
//! ```
//!
//! # Invariants
//!
//! - No actor call happens before gating passes
//! - Errors propagate unchanged; the engine performs no recovery or retry
//! - The engine never prints a failure banner or picks an exit code

pub mod command;
pub mod gate;
pub mod lifecycle;
pub mod runner;

pub use command::Command;
pub use gate::{
    check_target, current_user, requirements, ReadyContext, TargetError, TargetRequirement,
};
pub use lifecycle::{Lifecycle, LifecycleError, LifecycleState};
pub use runner::{execute_command, execute_with_lifecycle, run_command};

use std::path::PathBuf;

use thiserror::Error;

use crate::actor::ActionError;
use crate::api::ApiError;
use crate::core::route::RouteError;
use crate::ui::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The directory commands write files into.
    pub fn working_dir(&self) -> Result<PathBuf, CommandError> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().map_err(|e| CommandError::Io {
                path: PathBuf::from("."),
                message: e.to_string(),
            }),
        }
    }
}

/// Errors from running a command.
///
/// Every variant displays the underlying error's own message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    /// Precondition failed.
    #[error(transparent)]
    Target(#[from] TargetError),

    /// An actor operation failed.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The API client could not be set up.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Route arguments are inconsistent.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The lifecycle was driven out of order.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// A droplet GUID cannot be used in a file name.
    #[error("Invalid droplet GUID '{guid}'")]
    InvalidDropletGuid {
        /// GUID as returned by the platform
        guid: String,
    },

    /// A local file operation failed.
    #[error("{}: {message}", path.display())]
    Io {
        /// Path involved
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
}
