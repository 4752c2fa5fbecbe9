//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::route::RoutePath;

/// cfw - Command-line client for the application platform
#[derive(Parser, Debug)]
#[command(name = "cfw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if cfw was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check if a route exists
    #[command(
        name = "check-route",
        long_about = "Check if a route exists.\n\n\
            A route is identified either by hostname and path on a domain, or by \
            a TCP port on a domain. The two modes cannot be combined.",
        after_help = "EXAMPLES:\n    \
            cfw check-route example.com --hostname myhost --path foo\n    \
            cfw check-route tcp.example.com --port 5000"
    )]
    CheckRoute(CheckRouteArgs),

    /// Assign the isolation segment for a space
    #[command(name = "set-space-isolation-segment")]
    SetSpaceIsolationSegment(SetSpaceIsolationSegmentArgs),

    /// Start an app
    #[command(name = "start")]
    Start(StartArgs),

    /// Download an app's current droplet
    #[command(name = "download-droplet")]
    DownloadDroplet(DownloadDropletArgs),

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts.\n\n\
            Output the completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab completion.",
        after_help = "EXAMPLES:\n    \
            # Bash\n    \
            cfw completion bash >> ~/.bashrc\n\n    \
            # Zsh\n    \
            cfw completion zsh >> ~/.zshrc\n\n    \
            # Fish\n    \
            cfw completion fish > ~/.config/fish/completions/cfw.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of `check-route`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckRouteArgs {
    /// Domain of the route
    pub domain: String,

    /// Hostname of the route
    #[arg(short = 'n', long, conflicts_with = "port")]
    pub hostname: Option<String>,

    /// Path of the route; a leading '/' is added when missing
    #[arg(long, conflicts_with = "port")]
    pub path: Option<RoutePath>,

    /// TCP port of the route
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments of `set-space-isolation-segment`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SetSpaceIsolationSegmentArgs {
    /// Name of the space
    pub space_name: String,

    /// Name of the isolation segment
    pub segment_name: String,
}

/// Arguments of `start`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StartArgs {
    /// Name of the app
    pub app_name: String,
}

/// Arguments of `download-droplet`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DownloadDropletArgs {
    /// Name of the app
    pub app_name: String,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
