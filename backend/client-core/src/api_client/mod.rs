//! Generic request executor.
//!
//! One `execute` call performs exactly one request/response cycle: resolve
//! the endpoint variant, send it over the transport, gate on the status
//! code, normalize the body's field casing, decode. Each step short-circuits
//! into its classified error; success returns the decoded value and nothing
//! else.

use crate::endpoint::Endpoint;
use crate::error::api_client::ApiClientError;
use crate::field_normalizer::normalize_json;
use crate::transport::{ResolvedRequest, StubRegistry, Transport};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, trace, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Stateless executor for a family of endpoint descriptors.
///
/// Holds no mutable state; clones share only the underlying reqwest client,
/// so any number of calls may be outstanding concurrently without
/// interference.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_override: Option<Url>,
    transport: Transport,
}

impl ApiClient {
    /// Build a client against the endpoint's own base address.
    ///
    /// With `stub` set, the live transport is replaced by an empty stub
    /// registry: every request is answered immediately from the variant's
    /// sample data, without network I/O. Decode and validation behave
    /// exactly as in live mode.
    pub fn new(stub: bool) -> Result<Self, ApiClientError> {
        let transport = if stub {
            Transport::Stub(StubRegistry::new())
        } else {
            let client = Client::builder().timeout(DEFAULT_TIMEOUT_DURATION).build()?;
            Transport::Live(client)
        };

        Ok(Self {
            base_override: None,
            transport,
        })
    }

    /// Live client pointed at a custom base address instead of the
    /// endpoint's fixed one. Used by integration tests to target a local
    /// server.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiClientError> {
        let mut client = Self::new(false)?;
        client.base_override = Some(Url::parse(base_url)?);
        Ok(client)
    }

    /// Stub client with explicit canned responses.
    pub fn with_stubs(stubs: StubRegistry) -> Self {
        Self {
            base_override: None,
            transport: Transport::Stub(stubs),
        }
    }

    /// Resolve an endpoint variant into a concrete outbound request.
    ///
    /// Total for well-formed variants: the only fallible edges are URL
    /// parsing of the fixed base constant and the join, neither of which can
    /// fail for the paths an endpoint produces.
    fn resolve<E: Endpoint>(&self, target: &E) -> Result<ResolvedRequest, ApiClientError> {
        let base = match &self.base_override {
            Some(url) => url.clone(),
            None => Url::parse(target.base_url())?,
        };
        let url = base.join(&target.path())?;

        Ok(ResolvedRequest {
            method: target.method(),
            url,
            headers: target.headers(),
            sample: target.sample_data(),
        })
    }

    /// Perform one request/response cycle and decode the body into `D`.
    ///
    /// Returns the decoded value, or exactly one classified error:
    /// `Transport` if the call never completed, `BadStatus` for a code
    /// outside [200, 299] (the body is not decoded), `Decode` for a
    /// shape mismatch, `Unknown` for anything else.
    pub async fn execute<E, D>(&self, target: E) -> Result<D, ApiClientError>
    where
        E: Endpoint,
        D: DeserializeOwned,
    {
        let request = self.resolve(&target)?;
        debug!("{} {}", request.method, request.url);

        let response = self.transport.send(&request).await?;

        let status = HttpStatusCode::from(response.status);
        if !status.is_success() {
            warn!("{} answered HTTP {status}", request.url);
            return Err(ApiClientError::BadStatus {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let json: Value = serde_json::from_str(&response.body)?;
        let decoded: D = serde_json::from_value(normalize_json(json))?;

        trace!("Decoded response from {}", request.url);
        Ok(decoded)
    }
}
