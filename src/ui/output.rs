//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Normal text and the `OK`/`FAILED` markers go to stdout. Warnings,
//! errors and debug lines go to stderr. Quiet mode suppresses normal text
//! only; warnings and errors are always shown.

use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::messages::Message;
use super::Ui;
use crate::actor::Warnings;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", message);
}

/// Print a warning line (always shown).
pub fn warn(message: impl Display) {
    eprintln!("{}", message);
}

/// Terminal-backed [`Ui`].
#[derive(Debug, Clone, Copy)]
pub struct TerminalUi {
    verbosity: Verbosity,
    color: bool,
}

impl TerminalUi {
    /// Create a terminal UI, enabling color when stdout is a terminal.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Override color detection.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The configured verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn flavor(&self, value: &str) -> String {
        if self.color {
            value.cyan().bold().to_string()
        } else {
            value.to_string()
        }
    }
}

impl Ui for TerminalUi {
    fn display_text(&self, message: &Message) {
        print(message, self.verbosity);
    }

    fn display_text_with_flavor(&self, message: &Message) {
        print(message.render(&|v| self.flavor(v)), self.verbosity);
    }

    fn display_warning(&self, message: &Message) {
        warn(message);
    }

    fn display_warnings(&self, warnings: &Warnings) {
        for warning in warnings.iter() {
            warn(warning);
        }
    }

    fn display_ok(&self) {
        if self.color {
            print("OK".green().bold(), self.verbosity);
        } else {
            print("OK", self.verbosity);
        }
    }

    fn display_error(&self, err: &dyn Display) {
        error(err);
    }

    fn display_failed(&self) {
        if self.color {
            println!("{}", "FAILED".red().bold());
        } else {
            println!("FAILED");
        }
    }

    fn debug(&self, message: &str) {
        debug(message, self.verbosity);
    }
}
