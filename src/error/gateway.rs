use thiserror::Error;

use crate::gateway::Resource;

/// Failures surfaced by the SpaceX API gateway.
///
/// No retries are attempted, a single failure is returned to the caller as is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Transport failure, the request never produced a response.
    #[error("Failed to send request to {url}: {reason}")]
    Network { url: String, reason: String },
    /// The requested ID does not exist upstream.
    #[error("No {resource} found with ID {id:?}")]
    NotFound { resource: Resource, id: String },
    /// The response body could not be parsed into the expected shape.
    #[error("Failed to parse {resource} data: {reason}")]
    UnexpectedResponse { resource: Resource, reason: String },
    /// Any other non-success status code.
    #[error("Request to {url} failed with status {status}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
