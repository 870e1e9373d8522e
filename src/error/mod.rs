//! Error types for SpaceX Explorer.
//!
//! Each domain (gateway, configuration, session storage, form validation) has its own
//! `thiserror` enum. [`Error`] aggregates the ones that cross a page boundary and maps
//! them to the message shown to the user, so a failure always ends in an inline message
//! or empty-state card rather than a blank page.

pub mod config;
pub mod gateway;
pub mod storage;
pub mod validation;

use dioxus_logger::tracing;
use thiserror::Error;

pub use config::ConfigError;
pub use gateway::GatewayError;
pub use storage::StorageError;
pub use validation::ValidationError;

/// Main error type for SpaceX Explorer.
///
/// Uses `#[from]` so domain errors convert with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// SpaceX API error (transport, not found, unexpected payload or status).
    #[error(transparent)]
    GatewayError(#[from] GatewayError),
    /// Session storage error (unavailable backend, corrupt record).
    #[error(transparent)]
    StorageError(#[from] StorageError),
}

impl Error {
    /// Converts the error into the message displayed at the page boundary.
    ///
    /// Logs the full error and returns text that does not leak request details. Missing
    /// entities are expected outcomes and are logged at debug level, everything else is
    /// logged as an error.
    ///
    /// # Returns
    /// A short user-facing description of what could not be loaded
    pub fn into_display_message(self) -> String {
        match self {
            Self::GatewayError(GatewayError::NotFound { resource, id }) => {
                tracing::debug!(id = %id, "No {} found upstream", resource);

                format!("The requested {} could not be found.", resource)
            }
            Self::GatewayError(err @ GatewayError::Network { .. }) => {
                tracing::error!("{}", err);

                "Could not reach the SpaceX API. Check your connection and try again.".to_string()
            }
            Self::GatewayError(err) => {
                tracing::error!("{}", err);

                "Could not load data from the SpaceX API.".to_string()
            }
            err => {
                tracing::error!("{}", err);

                "Something went wrong, please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    mod into_display_message_tests {
        use crate::{
            error::{Error, GatewayError, StorageError},
            gateway::Resource,
        };

        #[test]
        /// Expect a not found message naming the resource
        fn not_found_names_resource() {
            let err = Error::from(GatewayError::NotFound {
                resource: Resource::Rockets,
                id: "missing".to_string(),
            });

            assert_eq!(
                err.into_display_message(),
                "The requested rocket could not be found."
            );
        }

        #[test]
        /// Expect request URLs to stay out of the displayed message
        fn network_error_hides_url() {
            let err = Error::from(GatewayError::Network {
                url: "https://api.spacexdata.com/v4/rockets".to_string(),
                reason: "connection refused".to_string(),
            });

            let message = err.into_display_message();

            assert!(!message.contains("spacexdata"));
            assert!(message.contains("Could not reach"));
        }

        #[test]
        /// Expect a generic message for non-gateway errors
        fn storage_error_is_generic() {
            let err = Error::from(StorageError::Unavailable("no window".to_string()));

            assert_eq!(
                err.into_display_message(),
                "Something went wrong, please try again."
            );
        }
    }
}
