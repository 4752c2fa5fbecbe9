//! actor::v2
//!
//! Actor backed by API v2 of the platform.

use async_trait::async_trait;
use serde::Deserialize;

use super::errors::ActionError;
use super::outcome::{Outcome, Warnings};
use super::resources::Space;
use super::traits::SpaceResolver;
use crate::api::CloudControllerClient;

/// A v2 list response.
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    resources: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct SpaceEntity {
    name: String,
    #[serde(default)]
    organization_guid: String,
}

#[derive(Debug, Deserialize)]
struct SpaceResource {
    metadata: Metadata,
    entity: SpaceEntity,
}

impl From<SpaceResource> for Space {
    fn from(resource: SpaceResource) -> Self {
        Space {
            guid: resource.metadata.guid,
            name: resource.entity.name,
            organization_guid: resource.entity.organization_guid,
        }
    }
}

/// API v2 actor.
#[derive(Debug, Clone)]
pub struct V2Actor {
    client: CloudControllerClient,
}

impl V2Actor {
    /// Create an actor using `client`.
    pub fn new(client: CloudControllerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpaceResolver for V2Actor {
    async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        space_name: &str,
    ) -> Outcome<Space> {
        let path = format!("/v2/organizations/{}/spaces", organization_guid);
        let query = [("q", format!("name:{}", space_name))];

        self.client
            .get::<Page<SpaceResource>>(&path, &query)
            .await
            .map_err(ActionError::from)
            .and_then(|page| {
                let found = page.resources.into_iter().next().map(Space::from);
                let result = found.ok_or_else(|| ActionError::SpaceNotFound {
                    name: space_name.to_string(),
                });
                Outcome::new(result, Warnings::new())
            })
    }
}
