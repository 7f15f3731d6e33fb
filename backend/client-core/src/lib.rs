//! API client core for the Roster user directory.
//!
//! Turns a declarative endpoint description ([`endpoint::UserApi`]) into a
//! decoded model via one HTTP round-trip ([`api_client::ApiClient::execute`]).
//! Every failure surfaces as exactly one
//! [`error::api_client::ApiClientError`] variant; nothing is retried or
//! cached at this layer.

pub mod api_client;
pub mod endpoint;
pub mod error;
pub mod field_normalizer;
pub mod transport;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use endpoint::{Endpoint, UserApi};
pub use error::api_client::ApiClientError;
pub use transport::{StubRegistry, StubResponse};

pub const API_HOSTNAME: &str = "jsonplaceholder.typicode.com";
pub const API_BASE_URL: &str = const_format::concatcp!("https://", API_HOSTNAME);
