//! core
//!
//! Domain types, configuration, session state, and pure derived values.
//!
//! # Modules
//!
//! - [`types`] - User, organization and space identities
//! - [`config`] - Config file schema and loading
//! - [`session`] - Immutable per-invocation session view
//! - [`route`] - Route descriptors and canonical URL composition
//!
//! Nothing in this module performs network I/O.

pub mod config;
pub mod route;
pub mod session;
pub mod types;
