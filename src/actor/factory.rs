//! actor::factory
//!
//! Actor creation from the session.
//!
//! Commands call [`connect`] during setup instead of building clients
//! themselves. Both API generations share one endpoint and one client.

use super::v2::V2Actor;
use super::v3::V3Actor;
use crate::api::{ApiError, CloudControllerClient};
use crate::core::session::Session;
use crate::ui::Verbosity;

/// Actors for both API generations of one platform.
#[derive(Debug, Clone)]
pub struct CloudActors {
    /// API v2 actor
    pub v2: V2Actor,
    /// API v3 actor
    pub v3: V3Actor,
}

/// Connect actors to the session's API endpoint.
///
/// No request is made; this only builds the client.
///
/// # Errors
///
/// - `NoApiEndpoint` if the session has no API URL
/// - `Client` if the HTTP client cannot be built
pub fn connect(session: &Session, verbosity: Verbosity) -> Result<CloudActors, ApiError> {
    let api_url = session
        .api_url()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::NoApiEndpoint {
            binary: session.binary_name().to_string(),
        })?;

    let client = CloudControllerClient::new(
        api_url,
        session.access_token().map(str::to_string),
        session.skip_ssl_validation(),
        verbosity,
    )?;

    Ok(CloudActors {
        v2: V2Actor::new(client.clone()),
        v3: V3Actor::new(client),
    })
}
