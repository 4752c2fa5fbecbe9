//! cfw - Command-line client for the application platform
//!
//! Exit codes: 0 on success, 1 when the command returned an error.

use std::process::ExitCode;

use cfwork::cli;
use cfwork::ui::{TerminalUi, Verbosity};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_failure(&TerminalUi::new(Verbosity::Normal), &err);
            ExitCode::FAILURE
        }
    }
}
