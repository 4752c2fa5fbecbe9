//! actor::v3
//!
//! Actor backed by API v3 of the platform.
//!
//! Multi-request operations collect warnings from every request they make,
//! in request order, and stop at the first failing request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::ActionError;
use super::outcome::{Outcome, Warnings};
use super::resources::{Application, ApplicationState, Droplet};
use super::traits::{
    ApplicationResolver, ApplicationStarter, DropletDownloader, IsolationSegmentAssigner,
    RouteChecker,
};
use crate::api::{ApiError, CloudControllerClient};
use crate::core::route::RouteDescriptor;

/// A v3 list response.
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    resources: Vec<T>,
}

impl<T> Page<T> {
    fn first(self) -> Option<T> {
        self.resources.into_iter().next()
    }
}

/// Any resource identified by GUID.
#[derive(Debug, Deserialize)]
struct Guid {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct AppResource {
    guid: String,
    name: String,
    #[serde(default)]
    state: String,
}

impl From<AppResource> for Application {
    fn from(app: AppResource) -> Self {
        Application {
            guid: app.guid,
            name: app.name,
            state: ApplicationState::parse(&app.state),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteReservation {
    matching_route: bool,
}

/// Request body of a to-one relationship update.
#[derive(Debug, Serialize)]
struct Relationship<'a> {
    data: GuidRef<'a>,
}

#[derive(Debug, Serialize)]
struct GuidRef<'a> {
    guid: &'a str,
}

/// API v3 actor.
#[derive(Debug, Clone)]
pub struct V3Actor {
    client: CloudControllerClient,
}

impl V3Actor {
    /// Create an actor using `client`.
    pub fn new(client: CloudControllerClient) -> Self {
        Self { client }
    }

    async fn assign_segment(
        &self,
        segment_name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<(), ActionError> {
        let query = [("names", segment_name.to_string())];
        let segments: Page<Guid> =
            warnings.absorb(self.client.get("/v3/isolation_segments", &query).await)?;
        let segment = segments
            .first()
            .ok_or_else(|| ActionError::IsolationSegmentNotFound {
                name: segment_name.to_string(),
            })?;

        let path = format!("/v3/spaces/{}/relationships/isolation_segment", space_guid);
        let body = Relationship {
            data: GuidRef {
                guid: &segment.guid,
            },
        };
        let _: serde_json::Value = warnings.absorb(self.client.patch(&path, &body).await)?;
        Ok(())
    }

    async fn find_application(
        &self,
        app_name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Application, ActionError> {
        let query = [
            ("names", app_name.to_string()),
            ("space_guids", space_guid.to_string()),
        ];
        let apps: Page<AppResource> = warnings.absorb(self.client.get("/v3/apps", &query).await)?;
        apps.first()
            .map(Application::from)
            .ok_or_else(|| ActionError::ApplicationNotFound {
                name: app_name.to_string(),
            })
    }

    async fn route_exists(
        &self,
        route: &RouteDescriptor,
        warnings: &mut Warnings,
    ) -> Result<bool, ActionError> {
        let query = [("names", route.domain().to_string())];
        let domains: Page<Guid> = warnings.absorb(self.client.get("/v3/domains", &query).await)?;
        let domain = domains.first().ok_or_else(|| ActionError::DomainNotFound {
            name: route.domain().to_string(),
        })?;

        let mut query = Vec::new();
        if !route.hostname().is_empty() {
            query.push(("host", route.hostname().to_string()));
        }
        if !route.path().is_empty() {
            query.push(("path", route.path().to_string()));
        }
        if let Some(port) = route.port() {
            query.push(("port", port.to_string()));
        }

        let path = format!("/v3/domains/{}/route_reservations", domain.guid);
        let reservation: RouteReservation =
            warnings.absorb(self.client.get(&path, &query).await)?;
        Ok(reservation.matching_route)
    }

    async fn download_droplet(
        &self,
        app_name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Droplet, ActionError> {
        let app = self.find_application(app_name, space_guid, warnings).await?;

        let path = format!("/v3/apps/{}/droplets/current", app.guid);
        let droplet: Guid =
            warnings
                .absorb(self.client.get::<Guid>(&path, &[]).await)
                .map_err(|err| match err {
                    ApiError::NotFound(_) => ActionError::NoCurrentDroplet {
                        app: app_name.to_string(),
                    },
                    other => ActionError::Api(other),
                })?;

        let path = format!("/v3/droplets/{}/download", droplet.guid);
        let bits = warnings.absorb(self.client.get_bytes(&path).await)?;
        Ok(Droplet {
            guid: droplet.guid,
            bits,
        })
    }
}

#[async_trait]
impl IsolationSegmentAssigner for V3Actor {
    async fn assign_isolation_segment_to_space_by_name_and_space(
        &self,
        segment_name: &str,
        space_guid: &str,
    ) -> Outcome<()> {
        let mut warnings = Warnings::new();
        let result = self
            .assign_segment(segment_name, space_guid, &mut warnings)
            .await;
        Outcome::new(result, warnings)
    }
}

#[async_trait]
impl ApplicationResolver for V3Actor {
    async fn get_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> Outcome<Application> {
        let mut warnings = Warnings::new();
        let result = self
            .find_application(app_name, space_guid, &mut warnings)
            .await;
        Outcome::new(result, warnings)
    }
}

#[async_trait]
impl ApplicationStarter for V3Actor {
    async fn start_application(&self, app_guid: &str) -> Outcome<Application> {
        let path = format!("/v3/apps/{}/actions/start", app_guid);
        self.client
            .post::<AppResource>(&path)
            .await
            .map(Application::from)
            .map_err(ActionError::from)
    }
}

#[async_trait]
impl RouteChecker for V3Actor {
    async fn check_route(&self, route: &RouteDescriptor) -> Outcome<bool> {
        let mut warnings = Warnings::new();
        let result = self.route_exists(route, &mut warnings).await;
        Outcome::new(result, warnings)
    }
}

#[async_trait]
impl DropletDownloader for V3Actor {
    async fn download_current_droplet(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> Outcome<Droplet> {
        let mut warnings = Warnings::new();
        let result = self
            .download_droplet(app_name, space_guid, &mut warnings)
            .await;
        Outcome::new(result, warnings)
    }
}
