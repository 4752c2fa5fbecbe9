//! engine::runner
//!
//! Engine runner - the single entry point for command execution.
//!
//! # Architecture
//!
//! This module enforces the command lifecycle:
//!
//! ```text
//! Setup -> [Experimental notice] -> CheckTarget -> CurrentUser -> Execute
//! ```
//!
//! **Key principle:** commands never check their own preconditions. All
//! command execution flows through [`run_command`] or [`execute_command`],
//! which ensure gating happens before any actor call.
//!
//! # Invariants
//!
//! - Commands receive a `ReadyContext`, never the raw session
//! - A gating failure returns the precondition error unchanged and no
//!   actor call is made
//! - Every error is returned as-is; the runner prints nothing on failure
//!
//! # Example
//!
//! ```ignore
//! use cfwork::engine::runner::{execute_command, run_command};
//!
//! // From parsed arguments, wiring real actors
//! run_command::<CheckRouteCommand>(args, &session, &ctx, &ui).await?;
//!
//! // From a command built with injected actors
//! execute_command(&command, &session, &ui).await?;
//! ```

use super::command::Command;
use super::gate::{check_target, current_user, ReadyContext};
use super::lifecycle::{Lifecycle, LifecycleState};
use super::{CommandError, Context};
use crate::core::session::Session;
use crate::ui::{Message, Ui};

/// Set up and run a command through the full lifecycle.
///
/// # Lifecycle
///
/// 1. **Setup**: `C::setup` wires actors; failure aborts before any output
/// 2. **Notice**: experimental commands print their notice
/// 3. **Target**: `C::REQUIREMENTS` checked against the session
/// 4. **Auth**: current user resolved
/// 5. **Execute**: `command.execute()` with the validated context
pub async fn run_command<C: Command>(
    args: C::Args,
    session: &Session,
    ctx: &Context,
    ui: &dyn Ui,
) -> Result<(), CommandError> {
    let mut lifecycle = Lifecycle::new();

    let command = match C::setup(args, session, ctx) {
        Ok(command) => command,
        Err(err) => return Err(fail(&mut lifecycle, ui, C::NAME, err)),
    };
    transition(&mut lifecycle, ui, C::NAME, LifecycleState::Configured)?;

    execute_with_lifecycle(&command, session, ui, &mut lifecycle).await
}

/// Run an already configured command.
///
/// Used when actors are injected rather than wired by `setup`.
pub async fn execute_command<C: Command>(
    command: &C,
    session: &Session,
    ui: &dyn Ui,
) -> Result<(), CommandError> {
    let mut lifecycle = Lifecycle::configured();
    execute_with_lifecycle(command, session, ui, &mut lifecycle).await
}

/// Run a configured command, recording its states in `lifecycle`.
///
/// `lifecycle` must be in `Configured`.
pub async fn execute_with_lifecycle<C: Command>(
    command: &C,
    session: &Session,
    ui: &dyn Ui,
    lifecycle: &mut Lifecycle,
) -> Result<(), CommandError> {
    if C::EXPERIMENTAL {
        ui.display_warning(&Message::Experimental);
    }

    if let Err(err) = check_target(session, C::REQUIREMENTS) {
        return Err(fail(lifecycle, ui, C::NAME, err));
    }
    transition(lifecycle, ui, C::NAME, LifecycleState::TargetChecked)?;

    let user = match current_user(session) {
        Ok(user) => user,
        Err(err) => return Err(fail(lifecycle, ui, C::NAME, err)),
    };
    transition(lifecycle, ui, C::NAME, LifecycleState::AuthChecked)?;

    let ready = ReadyContext::new(user, session);
    transition(lifecycle, ui, C::NAME, LifecycleState::Executing)?;

    match command.execute(&ready, ui).await {
        Ok(()) => transition(lifecycle, ui, C::NAME, LifecycleState::Succeeded),
        Err(err) => Err(fail(lifecycle, ui, C::NAME, err)),
    }
}

fn transition(
    lifecycle: &mut Lifecycle,
    ui: &dyn Ui,
    name: &str,
    next: LifecycleState,
) -> Result<(), CommandError> {
    let from = lifecycle.state();
    lifecycle.advance(next)?;
    ui.debug(&format!("{}: {} -> {}", name, from, next));
    Ok(())
}

/// Move to `Failed` and hand back the error to return.
fn fail(
    lifecycle: &mut Lifecycle,
    ui: &dyn Ui,
    name: &str,
    err: impl Into<CommandError>,
) -> CommandError {
    match transition(lifecycle, ui, name, LifecycleState::Failed) {
        Ok(()) => err.into(),
        Err(lifecycle_err) => lifecycle_err,
    }
}
