//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`messages`] - Typed user-facing messages
//! - [`output`] - Verbosity handling and the terminal [`Ui`]
//! - [`buffer`] - Recording [`Ui`] for tests
//!
//! # Design
//!
//! Commands communicate exclusively through the [`Ui`] trait. They decide
//! *what* is said and in which order; implementations decide how it looks
//! and which stream it lands on. Commands never print a failure banner:
//! that belongs to the dispatcher.

pub mod buffer;
pub mod messages;
pub mod output;

pub use buffer::{BufferUi, UiEvent};
pub use messages::Message;
pub use output::{TerminalUi, Verbosity};

use std::fmt::Display;

use crate::actor::Warnings;

/// Rendering sink used by commands and the dispatcher.
pub trait Ui: Send + Sync {
    /// Display a message on the normal output stream.
    fn display_text(&self, message: &Message);

    /// Display a message with its field values highlighted.
    fn display_text_with_flavor(&self, message: &Message);

    /// Display a diagnostic message on the error stream.
    fn display_warning(&self, message: &Message);

    /// Display backend warnings, one per line, in order.
    fn display_warnings(&self, warnings: &Warnings);

    /// Display the success marker.
    fn display_ok(&self);

    /// Display an error; used by [`crate::cli::report_failure`].
    fn display_error(&self, err: &dyn Display);

    /// Display the failure banner; used by [`crate::cli::report_failure`].
    fn display_failed(&self);

    /// Emit a debug line; shown only in debug verbosity.
    fn debug(&self, message: &str);
}
