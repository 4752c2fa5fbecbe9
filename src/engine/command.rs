//! engine::command
//!
//! Command trait for lifecycle integration.
//!
//! # Architecture
//!
//! Every command implements [`Command`] to run through the runner:
//!
//! 1. Commands declare their target requirement statically
//! 2. `setup` wires actors from the session; it prints nothing
//! 3. Commands receive a validated [`ReadyContext`], never a raw session
//! 4. `execute` performs the ordered actor calls and reports through the UI
//!
//! # Invariants
//!
//! - `execute` is only called after gating passes
//! - `execute` surfaces the warnings of every actor call it makes, before
//!   acting on that call's result
//! - `execute` displays the success marker only after every call succeeded
//! - `execute` never displays a failure banner; it returns the error
//!
//! # Example
//!
//! ```ignore
//! use cfwork::engine::command::Command;
//! use cfwork::engine::gate::{requirements, ReadyContext, TargetRequirement};
//!
//! struct HelloCommand;
//!
//! #[async_trait]
//! impl Command for HelloCommand {
//!     const NAME: &'static str = "hello";
//!     const REQUIREMENTS: &'static TargetRequirement = &requirements::LOGGED_IN;
//!     type Args = ();
//!
//!     fn setup(_: (), _: &Session, _: &Context) -> Result<Self, CommandError> {
//!         Ok(HelloCommand)
//!     }
//!
//!     async fn execute(&self, _: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError> {
//!         ui.display_ok();
//!         Ok(())
//!     }
//! }
//! ```

use async_trait::async_trait;

use super::gate::{ReadyContext, TargetRequirement};
use super::{CommandError, Context};
use crate::core::session::Session;
use crate::ui::Ui;

/// A command that runs through the engine lifecycle.
#[async_trait]
pub trait Command: Sized + Send + Sync {
    /// Name shown in debug output.
    const NAME: &'static str;

    /// What must be targeted before the command may run.
    const REQUIREMENTS: &'static TargetRequirement;

    /// Commands not yet stable display a notice before gating.
    const EXPERIMENTAL: bool = false;

    /// Parsed arguments consumed by `setup`.
    type Args: Send;

    /// Wire actors and keep arguments.
    ///
    /// Runs before any user-facing text. Must not call the platform.
    fn setup(args: Self::Args, session: &Session, ctx: &Context) -> Result<Self, CommandError>;

    /// Run the command's call sequence against a validated context.
    async fn execute(&self, ready: &ReadyContext, ui: &dyn Ui) -> Result<(), CommandError>;
}
