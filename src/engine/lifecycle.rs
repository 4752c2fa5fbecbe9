//! engine::lifecycle
//!
//! The command lifecycle state machine.
//!
//! ```text
//! Created -> Configured -> TargetChecked -> AuthChecked -> Executing -> Succeeded
//!    |           |              |                             |
//!    +-----------+--------------+------------> Failed <-------+
//! ```
//!
//! # Invariants
//!
//! - States only move forward along the edges above
//! - `Succeeded` and `Failed` are terminal
//! - The history records every state entered, starting with `Created`

use std::fmt;

use thiserror::Error;

/// A lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Command value exists; actors not yet wired.
    Created,
    /// Setup succeeded.
    Configured,
    /// Target requirements satisfied.
    TargetChecked,
    /// Current user resolved.
    AuthChecked,
    /// Running the command's call sequence.
    Executing,
    /// Every call succeeded.
    Succeeded,
    /// Some step failed.
    Failed,
}

impl LifecycleState {
    /// Check if no further transition is allowed.
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Succeeded | LifecycleState::Failed)
    }

    /// Check if `self -> next` is an allowed transition.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Created, Configured)
                | (Created, Failed)
                | (Configured, TargetChecked)
                | (Configured, Failed)
                | (TargetChecked, AuthChecked)
                | (TargetChecked, Failed)
                | (AuthChecked, Executing)
                | (Executing, Succeeded)
                | (Executing, Failed)
        )
    }

    /// Lowercase name used in debug output.
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Created => "created",
            LifecycleState::Configured => "configured",
            LifecycleState::TargetChecked => "target-checked",
            LifecycleState::AuthChecked => "auth-checked",
            LifecycleState::Executing => "executing",
            LifecycleState::Succeeded => "succeeded",
            LifecycleState::Failed => "failed",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested transition is not an edge of the machine.
    #[error("invalid lifecycle transition: {from} -> {to}")]
    InvalidTransition {
        /// State before
        from: LifecycleState,
        /// Requested state
        to: LifecycleState,
    },
}

/// Tracks one command invocation through its states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    history: Vec<LifecycleState>,
}

impl Lifecycle {
    /// Start in `Created`.
    pub fn new() -> Self {
        Self {
            history: vec![LifecycleState::Created],
        }
    }

    /// Start from an already configured command.
    pub fn configured() -> Self {
        Self {
            history: vec![LifecycleState::Created, LifecycleState::Configured],
        }
    }

    /// The current state.
    pub fn state(&self) -> LifecycleState {
        self.history
            .last()
            .copied()
            .unwrap_or(LifecycleState::Created)
    }

    /// Every state entered so far, in order.
    pub fn history(&self) -> &[LifecycleState] {
        &self.history
    }

    /// Move to `next`.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if `next` is not reachable from the current state.
    pub fn advance(&mut self, next: LifecycleState) -> Result<(), LifecycleError> {
        let from = self.state();
        if !from.can_transition_to(next) {
            return Err(LifecycleError::InvalidTransition { from, to: next });
        }
        self.history.push(next);
        Ok(())
    }

    /// Move to `Failed`.
    pub fn fail(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecycleState::Failed)
    }

    /// Check if the lifecycle has finished.
    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
