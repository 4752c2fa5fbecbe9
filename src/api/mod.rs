//! api
//!
//! Thin client for the platform's HTTP API (generations v2 and v3 share
//! one endpoint and one client).
//!
//! # Modules
//!
//! - `client`: [`CloudControllerClient`] request helpers
//! - `errors`: [`ApiError`] status mapping
//! - [`warnings`]: `X-Cf-Warnings` header decoding
//!
//! Actors in [`crate::actor`] build on this client; commands never talk
//! to it directly.

mod client;
mod errors;
pub mod warnings;

pub use client::CloudControllerClient;
pub use errors::ApiError;
