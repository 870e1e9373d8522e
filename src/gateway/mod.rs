//! SpaceX REST API gateway.
//!
//! [`SpaceXGateway`] issues GET requests against a fixed base URL and parses the JSON
//! body into typed DTOs. The HTTP client is abstracted behind [`HttpTransport`] so the
//! same status mapping & parsing is shared by the browser (`reqwasm`) and native
//! (`reqwest`) transports. There are no retries and no caching, every call is a fresh
//! round trip.

#[cfg(test)]
pub(crate) mod fake;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::{fmt, future::Future};

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{config::Config, error::GatewayError};

/// Resources exposed by the SpaceX API that this application reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Rockets,
    Launches,
}

impl Resource {
    /// Path segment of the resource collection
    pub fn path(&self) -> &'static str {
        match self {
            Self::Rockets => "rockets",
            Self::Launches => "launches",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rockets => write!(f, "rocket"),
            Self::Launches => write!(f, "launch"),
        }
    }
}

/// Status code & body of a completed HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client used by the gateway.
///
/// Implementations only perform the request; a response with any status code is a
/// success at this level. Transport failures map to [`GatewayError::Network`].
pub trait HttpTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, GatewayError>>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = web::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = http::ReqwestTransport;

/// Gateway type used by the application on the current platform.
pub type AppGateway = SpaceXGateway<PlatformTransport>;

#[derive(Clone, Debug)]
pub struct SpaceXGateway<T> {
    base_url: String,
    transport: T,
}

impl AppGateway {
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, PlatformTransport::default())
    }
}

impl<T: HttpTransport> SpaceXGateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full collection of a resource.
    ///
    /// # Arguments
    /// - `resource` - Collection to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<E>)` - Every entity in the collection, in API order
    /// - `Err(GatewayError::Network)` - The request could not be sent
    /// - `Err(GatewayError::UnexpectedStatus)` - The API answered with a non-success status
    /// - `Err(GatewayError::UnexpectedResponse)` - The body is not a list of `E`
    pub async fn fetch_all<E: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<E>, GatewayError> {
        let url = format!("{}/{}", self.base_url, resource.path());

        tracing::debug!(url = %url, "Fetching {} collection", resource);

        let response = self.transport.get(&url).await?;

        match response.status {
            200..=299 => parse(resource, &response.body),
            status => Err(GatewayError::UnexpectedStatus { url, status }),
        }
    }

    /// Fetches a single entity by ID.
    ///
    /// The API answers 404 for unknown IDs and 400 for IDs it cannot interpret, both
    /// mean the entity does not exist from the caller's point of view.
    ///
    /// # Arguments
    /// - `resource` - Collection the entity belongs to
    /// - `id` - Entity ID
    ///
    /// # Returns
    /// - `Ok(E)` - The entity
    /// - `Err(GatewayError::NotFound)` - No entity with this ID exists
    /// - `Err(GatewayError::Network)` - The request could not be sent
    /// - `Err(GatewayError::UnexpectedStatus)` - Any other non-success status
    /// - `Err(GatewayError::UnexpectedResponse)` - The body is not an `E`
    pub async fn fetch_one<E: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
    ) -> Result<E, GatewayError> {
        let not_found = || GatewayError::NotFound {
            resource,
            id: id.to_string(),
        };

        // An ID that would change the request path can't name an entity
        if id.is_empty() || id.contains(['/', '?', '#']) {
            return Err(not_found());
        }

        let url = format!("{}/{}/{}", self.base_url, resource.path(), id);

        tracing::debug!(url = %url, "Fetching {} {}", resource, id);

        let response = self.transport.get(&url).await?;

        match response.status {
            200..=299 => parse(resource, &response.body),
            400 | 404 => Err(not_found()),
            status => Err(GatewayError::UnexpectedStatus { url, status }),
        }
    }
}

fn parse<E: DeserializeOwned>(resource: Resource, body: &str) -> Result<E, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::UnexpectedResponse {
        resource,
        reason: e.to_string(),
    })
}
