//! api::client
//!
//! Authenticated HTTP client for the platform API.
//!
//! # Design
//!
//! Every request yields an [`Outcome`]: the decoded body or an
//! [`ApiError`], together with the warnings the platform attached to the
//! response. Warnings are collected for failed responses too.
//!
//! Pagination, token refresh and retries are not handled here; a single
//! request maps to a single HTTP exchange.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::warnings;
use crate::actor::{Outcome, Warnings};
use crate::ui::output::{self, Verbosity};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = concat!("cfw/", env!("CARGO_PKG_VERSION"));

/// Error body shapes returned by the platform.
///
/// API v3 uses an `errors` array; API v2 uses a top-level `description`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorEntry {
    detail: Option<String>,
    title: Option<String>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        self.errors
            .into_iter()
            .find_map(|e| e.detail.or(e.title))
            .or(self.description)
    }
}

/// Client for one platform API endpoint.
#[derive(Clone)]
pub struct CloudControllerClient {
    client: Client,
    api_base: String,
    token: Option<String>,
    verbosity: Verbosity,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for CloudControllerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudControllerClient")
            .field("api_base", &self.api_base)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl CloudControllerClient {
    /// Create a client for `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the HTTP client cannot be built.
    pub fn new(
        api_base: impl Into<String>,
        token: Option<String>,
        skip_ssl_validation: bool,
        verbosity: Verbosity,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .danger_accept_invalid_certs(skip_ssl_validation)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
            verbosity,
        })
    }

    /// The API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("bearer {}", token))
                .map_err(|_| ApiError::InvalidToken("token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Outcome<T, ApiError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send_json("GET", path, request).await
    }

    /// POST without a body and decode the JSON response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Outcome<T, ApiError> {
        let request = self.client.post(self.url(path));
        self.send_json("POST", path, request).await
    }

    /// PATCH a JSON body and decode the JSON response.
    pub async fn patch<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Outcome<T, ApiError> {
        let request = self.client.patch(self.url(path)).json(body);
        self.send_json("PATCH", path, request).await
    }

    /// GET raw bytes (e.g. droplet bits).
    pub async fn get_bytes(&self, path: &str) -> Outcome<Vec<u8>, ApiError> {
        let request = self.client.get(self.url(path));
        let (response, warnings) = match self.send("GET", path, request).await {
            Ok(pair) => pair,
            Err((err, warnings)) => return Outcome::err(err, warnings),
        };

        match response.bytes().await {
            Ok(bytes) => Outcome::ok(bytes.to_vec(), warnings),
            Err(e) => Outcome::err(ApiError::Network(e.to_string()), warnings),
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Outcome<T, ApiError> {
        let (response, warnings) = match self.send(method, path, request).await {
            Ok(pair) => pair,
            Err((err, warnings)) => return Outcome::err(err, warnings),
        };

        match response.json::<T>().await {
            Ok(body) => Outcome::ok(body, warnings),
            Err(e) => Outcome::err(ApiError::Decode(e.to_string()), warnings),
        }
    }

    /// Send a request, returning the successful response or the mapped
    /// error, with the response warnings either way.
    async fn send(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<(Response, Warnings), (ApiError, Warnings)> {
        let headers = self.headers().map_err(|e| (e, Warnings::new()))?;
        output::debug(format!("REQUEST: {} {}", method, path), self.verbosity);

        let response = request
            .headers(headers)
            .send()
            .await
            .map_err(|e| (ApiError::Network(e.to_string()), Warnings::new()))?;

        let status = response.status();
        let warnings = warnings::from_headers(response.headers());
        output::debug(format!("RESPONSE: {} {}", status.as_u16(), path), self.verbosity);

        if status.is_success() {
            Ok((response, warnings))
        } else {
            Err((error_for(status, response).await, warnings))
        }
    }
}

/// Map an error response to an [`ApiError`].
async fn error_for(status: StatusCode, response: Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::message)
        .unwrap_or_else(|| "Unknown error".to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::InvalidToken(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}
