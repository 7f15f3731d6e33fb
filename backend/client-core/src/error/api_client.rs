//! Classified failure for one request/response cycle.
//!
//! Exactly one variant describes any failed call. Classification happens in
//! the `From` impls so call sites can use `?` and still capture the caller's
//! location.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    /// The server answered, but outside the [200, 299] success range.
    #[error("HTTP Status Error: {status} {location}")]
    BadStatus {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    /// The body arrived but did not match the expected shape.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// The call never completed: connection refused, timeout, DNS failure.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// Anything not covered above (client build, URL join).
    #[error("Unknown Error: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if error.is_connect() || error.is_timeout() || error.is_request() || error.is_redirect() {
            return ApiClientError::Transport {
                message: error.to_string(),
                location,
            };
        }

        if error.is_decode() {
            return ApiClientError::Decode {
                message: error.to_string(),
                location,
            };
        }

        ApiClientError::Unknown {
            message: error.to_string(),
            location,
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::Unknown {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
