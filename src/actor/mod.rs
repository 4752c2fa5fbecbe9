//! actor
//!
//! Business-logic facades over the platform API.
//!
//! # Modules
//!
//! - [`outcome`] - [`Outcome`] and [`Warnings`]
//! - `errors` - [`ActionError`]
//! - `resources` - Resources returned by actors
//! - `traits` - One trait per capability
//! - [`v2`], [`v3`] - Actors for each API generation
//! - [`mock`] - Deterministic actor for tests
//! - [`factory`] - Actor creation from the session
//!
//! # Architecture
//!
//! Commands depend on the capability traits only. Which generation serves
//! which capability is decided once, in each command's setup.

mod errors;
pub mod factory;
pub mod mock;
pub mod outcome;
mod resources;
mod traits;
pub mod v2;
pub mod v3;

pub use errors::ActionError;
pub use factory::{connect, CloudActors};
pub use outcome::{Outcome, Warnings};
pub use resources::{Application, ApplicationState, Droplet, Space};
pub use traits::{
    ApplicationResolver, ApplicationStarter, DropletDownloader, IsolationSegmentAssigner,
    RouteChecker, SpaceResolver,
};
pub use v2::V2Actor;
pub use v3::V3Actor;
