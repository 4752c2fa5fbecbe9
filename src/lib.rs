//! cfwork - Command orchestration for an application-platform CLI
//!
//! cfwork drives every command of the `cfw` binary through one lifecycle:
//! check the targeted organization/space and the logged-in user, call one
//! or more platform actors in a fixed order, surface each call's warnings
//! as soon as it returns, and report success only when every call
//! succeeded.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates Setup → Gate → Execute lifecycle
//! - [`actor`] - Platform operations returning results with warnings
//! - [`api`] - HTTP client for the platform API
//! - [`core`] - Configuration, session, and route types
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! 1. No actor call happens before target and login checks pass
//! 2. Warnings are displayed even when their call failed
//! 3. Warnings from successive calls are displayed in call order
//! 4. `OK` is displayed only when every call succeeded

pub mod actor;
pub mod api;
pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
