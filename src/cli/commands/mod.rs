//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds the terminal UI from the global flags
//! 2. Runs its command struct through the engine runner
//! 3. Returns the error unchanged; `main` prints it and the failure banner
//!
//! Handlers do NOT call actors directly.
//!
//! # Async Commands
//!
//! Actors are async because they perform network I/O. Each handler runs
//! its command on a current-thread tokio runtime created for the
//! invocation, so actor calls are awaited strictly one after another.

mod check_route;
mod completion;
mod download_droplet;
mod set_space_isolation_segment;
mod start;

// Re-export command functions and structs for testing and direct invocation
pub use check_route::{check_route, CheckRouteCommand};
pub use completion::{completion, write_completion};
pub use download_droplet::{download_droplet, droplet_file_name, DownloadDropletCommand};
pub use set_space_isolation_segment::{
    set_space_isolation_segment, SetSpaceIsolationSegmentCommand,
};
pub use start::{start, StartCommand};

use std::future::Future;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::session::Session;
use crate::engine::Context;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, binary_name: &str) -> Result<()> {
    if let Command::Completion { shell } = command {
        return completion::completion(shell);
    }

    let config = Config::load().context("Failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config: {}", path.display()), ctx.verbosity());
    }
    let session = Session::from_config(&config, binary_name);

    match command {
        Command::CheckRoute(args) => check_route::check_route(args, &session, ctx),
        Command::SetSpaceIsolationSegment(args) => {
            set_space_isolation_segment::set_space_isolation_segment(args, &session, ctx)
        }
        Command::Start(args) => start::start(args, &session, ctx),
        Command::DownloadDroplet(args) => download_droplet::download_droplet(args, &session, ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Run `future` to completion on a fresh current-thread runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(rt.block_on(future))
}
