//! cli
//!
//! Command-line interface layer for cfw.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the session
//! - Delegate to command handlers
//! - Does NOT call the platform directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] for execution. Every command's preconditions and call
//! ordering are enforced by the engine's runner.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::Path;

use crate::core::session::DEFAULT_BINARY_NAME;
use crate::engine;
use crate::ui::Ui;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    let binary = binary_name(std::env::args().next().as_deref());
    commands::dispatch(cli.command, &ctx, &binary)
}

/// Report a failed invocation: the full error chain, then the failure banner.
pub fn report_failure(ui: &dyn Ui, err: &anyhow::Error) {
    ui.display_error(&format!("{:#}", err));
    ui.display_failed();
}

/// Name the binary was invoked as, for user-facing hints.
pub fn binary_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_BINARY_NAME)
        .to_string()
}
