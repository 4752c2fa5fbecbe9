//! actor::mock
//!
//! Mock actor for deterministic testing.
//!
//! # Design
//!
//! [`MockActor`] implements every capability trait. Each operation answers
//! with a configured [`Outcome`] when one is set, or with a plausible
//! default derived from its arguments otherwise. Every call is recorded
//! so tests can check which operations ran, with which arguments, and in
//! which order.
//!
//! Clones share state, so one clone can be handed to a command while the
//! test keeps another for verification.
//!
//! # Example
//!
//! ```
//! use cfwork::actor::mock::{MockActor, MockOperation};
//! use cfwork::actor::{ActionError, ApplicationResolver, Outcome};
//!
//! # tokio_test::block_on(async {
//! let actor = MockActor::new().application_reply(Outcome::err(
//!     ActionError::ApplicationNotFound { name: "some-app".into() },
//!     vec!["get-warning"],
//! ));
//!
//! let outcome = actor
//!     .get_application_by_name_and_space("some-app", "space-guid")
//!     .await;
//! assert!(!outcome.is_ok());
//! assert_eq!(actor.operations().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::outcome::Outcome;
use super::resources::{Application, ApplicationState, Droplet, Space};
use super::traits::{
    ApplicationResolver, ApplicationStarter, DropletDownloader, IsolationSegmentAssigner,
    RouteChecker, SpaceResolver,
};
use crate::core::route::RouteDescriptor;

/// Mock actor for testing.
#[derive(Debug, Clone, Default)]
pub struct MockActor {
    inner: Arc<Mutex<MockActorInner>>,
}

/// Configured replies and the operation log.
#[derive(Debug, Default)]
struct MockActorInner {
    space: Option<Outcome<Space>>,
    assign: Option<Outcome<()>>,
    application: Option<Outcome<Application>>,
    start: Option<Outcome<Application>>,
    route: Option<Outcome<bool>>,
    droplet: Option<Outcome<Droplet>>,
    operations: Vec<MockOperation>,
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    GetSpaceByOrganizationAndName {
        organization_guid: String,
        space_name: String,
    },
    AssignIsolationSegment {
        segment_name: String,
        space_guid: String,
    },
    GetApplicationByNameAndSpace {
        app_name: String,
        space_guid: String,
    },
    StartApplication {
        app_guid: String,
    },
    CheckRoute {
        route: RouteDescriptor,
    },
    DownloadCurrentDroplet {
        app_name: String,
        space_guid: String,
    },
}

impl MockActor {
    /// Create a mock answering every call with its default reply.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockActorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn configure(self, f: impl FnOnce(&mut MockActorInner)) -> Self {
        f(&mut self.lock());
        self
    }

    /// Reply for `get_space_by_organization_and_name`.
    pub fn space_reply(self, reply: Outcome<Space>) -> Self {
        self.configure(|inner| inner.space = Some(reply))
    }

    /// Reply for `assign_isolation_segment_to_space_by_name_and_space`.
    pub fn assign_reply(self, reply: Outcome<()>) -> Self {
        self.configure(|inner| inner.assign = Some(reply))
    }

    /// Reply for `get_application_by_name_and_space`.
    pub fn application_reply(self, reply: Outcome<Application>) -> Self {
        self.configure(|inner| inner.application = Some(reply))
    }

    /// Reply for `start_application`.
    pub fn start_reply(self, reply: Outcome<Application>) -> Self {
        self.configure(|inner| inner.start = Some(reply))
    }

    /// Reply for `check_route`.
    pub fn route_reply(self, reply: Outcome<bool>) -> Self {
        self.configure(|inner| inner.route = Some(reply))
    }

    /// Reply for `download_current_droplet`.
    pub fn droplet_reply(self, reply: Outcome<Droplet>) -> Self {
        self.configure(|inner| inner.droplet = Some(reply))
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    /// Number of recorded operations matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&MockOperation) -> bool) -> usize {
        self.lock().operations.iter().filter(|op| predicate(op)).count()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        self.lock().operations.clear();
    }

    fn record(&self, op: MockOperation) {
        self.lock().operations.push(op);
    }
}

#[async_trait]
impl SpaceResolver for MockActor {
    async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        space_name: &str,
    ) -> Outcome<Space> {
        self.record(MockOperation::GetSpaceByOrganizationAndName {
            organization_guid: organization_guid.to_string(),
            space_name: space_name.to_string(),
        });
        self.lock().space.clone().unwrap_or_else(|| {
            Outcome::ok(
                Space {
                    guid: format!("{}-guid", space_name),
                    name: space_name.to_string(),
                    organization_guid: organization_guid.to_string(),
                },
                Vec::<String>::new(),
            )
        })
    }
}

#[async_trait]
impl IsolationSegmentAssigner for MockActor {
    async fn assign_isolation_segment_to_space_by_name_and_space(
        &self,
        segment_name: &str,
        space_guid: &str,
    ) -> Outcome<()> {
        self.record(MockOperation::AssignIsolationSegment {
            segment_name: segment_name.to_string(),
            space_guid: space_guid.to_string(),
        });
        self.lock()
            .assign
            .clone()
            .unwrap_or_else(|| Outcome::ok((), Vec::<String>::new()))
    }
}

#[async_trait]
impl ApplicationResolver for MockActor {
    async fn get_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> Outcome<Application> {
        self.record(MockOperation::GetApplicationByNameAndSpace {
            app_name: app_name.to_string(),
            space_guid: space_guid.to_string(),
        });
        self.lock().application.clone().unwrap_or_else(|| {
            Outcome::ok(
                Application {
                    guid: format!("{}-guid", app_name),
                    name: app_name.to_string(),
                    state: ApplicationState::Stopped,
                },
                Vec::<String>::new(),
            )
        })
    }
}

#[async_trait]
impl ApplicationStarter for MockActor {
    async fn start_application(&self, app_guid: &str) -> Outcome<Application> {
        self.record(MockOperation::StartApplication {
            app_guid: app_guid.to_string(),
        });
        self.lock().start.clone().unwrap_or_else(|| {
            Outcome::ok(
                Application {
                    guid: app_guid.to_string(),
                    name: String::new(),
                    state: ApplicationState::Started,
                },
                Vec::<String>::new(),
            )
        })
    }
}

#[async_trait]
impl RouteChecker for MockActor {
    async fn check_route(&self, route: &RouteDescriptor) -> Outcome<bool> {
        self.record(MockOperation::CheckRoute {
            route: route.clone(),
        });
        self.lock()
            .route
            .clone()
            .unwrap_or_else(|| Outcome::ok(false, Vec::<String>::new()))
    }
}

#[async_trait]
impl DropletDownloader for MockActor {
    async fn download_current_droplet(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> Outcome<Droplet> {
        self.record(MockOperation::DownloadCurrentDroplet {
            app_name: app_name.to_string(),
            space_guid: space_guid.to_string(),
        });
        self.lock().droplet.clone().unwrap_or_else(|| {
            Outcome::ok(
                Droplet {
                    guid: "droplet-guid".to_string(),
                    bits: b"droplet".to_vec(),
                },
                Vec::<String>::new(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActionError;

    #[tokio::test]
    async fn default_replies_follow_arguments() {
        let actor = MockActor::new();

        let space = actor
            .get_space_by_organization_and_name("org-guid", "dev")
            .await
            .result
            .unwrap();
        assert_eq!(space.guid, "dev-guid");
        assert_eq!(space.organization_guid, "org-guid");

        let app = actor
            .get_application_by_name_and_space("web", "dev-guid")
            .await
            .result
            .unwrap();
        assert_eq!(app.guid, "web-guid");
        assert!(!app.is_started());
    }

    #[tokio::test]
    async fn configured_reply_wins() {
        let actor = MockActor::new().space_reply(Outcome::err(
            ActionError::SpaceNotFound {
                name: "dev".into(),
            },
            vec!["w"],
        ));

        let outcome = actor
            .get_space_by_organization_and_name("org-guid", "dev")
            .await;
        assert_eq!(
            outcome.result,
            Err(ActionError::SpaceNotFound { name: "dev".into() })
        );
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_operation_log() {
        let actor = MockActor::new();
        let handle = actor.clone();

        let _ = handle.start_application("app-guid").await;
        let _ = handle.start_application("app-guid").await;

        assert_eq!(
            actor.count(|op| matches!(op, MockOperation::StartApplication { .. })),
            2
        );
        assert_eq!(
            actor.operations()[0],
            MockOperation::StartApplication {
                app_guid: "app-guid".into()
            }
        );

        actor.clear_operations();
        assert!(handle.operations().is_empty());
    }
}
