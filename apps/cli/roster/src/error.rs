use client_core::ApiClientError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that can occur while running the application.
///
/// Client failures stay classified inside client-core; at this level they
/// are rendered to a message but keep location tracking.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Error from this app (logger setup, argument handling)
    #[error("Roster Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error surfaced by a client-core request
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ApiClientError> for RosterError {
    #[track_caller]
    fn from(error: ApiClientError) -> Self {
        RosterError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
