//! actor::traits
//!
//! One small trait per platform capability.
//!
//! # Design
//!
//! Commands hold one handle per capability they need, so a command can
//! resolve a resource through one API generation and act on it through
//! another without knowing which backend serves which call. Every method
//! returns an [`Outcome`]: warnings travel with the result on both paths.
//!
//! # Example
//!
//! ```
//! use cfwork::actor::mock::MockActor;
//! use cfwork::actor::ApplicationResolver;
//!
//! # tokio_test::block_on(async {
//! let actor = MockActor::new();
//! let outcome = actor
//!     .get_application_by_name_and_space("some-app", "space-guid")
//!     .await;
//! assert_eq!(outcome.result.unwrap().name, "some-app");
//! # });
//! ```

use async_trait::async_trait;

use super::outcome::Outcome;
use super::resources::{Application, Droplet, Space};
use crate::core::route::RouteDescriptor;

/// Resolves a space by organization and name.
#[async_trait]
pub trait SpaceResolver: Send + Sync {
    /// Look up `space_name` within the organization `organization_guid`.
    ///
    /// Fails with `SpaceNotFound` when no such space exists.
    async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        space_name: &str,
    ) -> Outcome<Space>;
}

/// Assigns isolation segments to spaces.
#[async_trait]
pub trait IsolationSegmentAssigner: Send + Sync {
    /// Make the segment named `segment_name` the default of `space_guid`.
    ///
    /// Fails with `IsolationSegmentNotFound` when no such segment exists.
    async fn assign_isolation_segment_to_space_by_name_and_space(
        &self,
        segment_name: &str,
        space_guid: &str,
    ) -> Outcome<()>;
}

/// Resolves an application by name within a space.
#[async_trait]
pub trait ApplicationResolver: Send + Sync {
    /// Look up `app_name` in `space_guid`.
    ///
    /// Fails with `ApplicationNotFound` when no such app exists.
    async fn get_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> Outcome<Application>;
}

/// Starts applications.
#[async_trait]
pub trait ApplicationStarter: Send + Sync {
    /// Start the app `app_guid`, returning its updated state.
    async fn start_application(&self, app_guid: &str) -> Outcome<Application>;
}

/// Checks whether routes exist.
#[async_trait]
pub trait RouteChecker: Send + Sync {
    /// Return whether `route` is already reserved.
    ///
    /// Fails with `DomainNotFound` when the route's domain does not exist.
    async fn check_route(&self, route: &RouteDescriptor) -> Outcome<bool>;
}

/// Downloads application droplets.
#[async_trait]
pub trait DropletDownloader: Send + Sync {
    /// Download the current droplet of `app_name` in `space_guid`.
    ///
    /// Fails with `ApplicationNotFound` or `NoCurrentDroplet`.
    async fn download_current_droplet(&self, app_name: &str, space_guid: &str)
        -> Outcome<Droplet>;
}
