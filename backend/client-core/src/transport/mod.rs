//! The wire between a resolved request and a raw response.
//!
//! Live mode issues a real reqwest call; stub mode answers from a canned
//! registry without any I/O, so decode and validation logic can be tested
//! deterministically.

use crate::error::api_client::ApiClientError;

use std::collections::HashMap;

use log::trace;
use reqwest::{Client, Method};
use url::Url;

/// One fully resolved outbound request.
///
/// Produced by `ApiClient::resolve` from an endpoint variant; pure data.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: &'static [(&'static str, &'static str)],
    /// Stub-mode fallback body for this request's variant.
    pub sample: &'static str,
}

/// Status and body of a completed call, before validation or decode.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// A canned response for one request path.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

/// Canned responses keyed by request path.
///
/// A path with no registration falls back to the endpoint variant's sample
/// data with status 200, so a fresh stub client answers every request.
#[derive(Debug, Clone, Default)]
pub struct StubRegistry {
    responses: HashMap<String, StubResponse>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for `path`. Replaces any earlier
    /// registration for the same path.
    pub fn register(&mut self, path: &str, status: u16, body: &str) {
        self.responses.insert(
            path.to_string(),
            StubResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    fn lookup(&self, path: &str) -> Option<&StubResponse> {
        self.responses.get(path)
    }
}

/// The transport behind an `ApiClient`.
#[derive(Debug, Clone)]
pub enum Transport {
    /// Real network I/O through a shared reqwest client.
    Live(Client),

    /// Immediate canned responses; no network involved.
    Stub(StubRegistry),
}

impl Transport {
    /// Execute one request and return its raw status and body.
    ///
    /// Transport-level failures (connection refused, timeout, DNS) surface
    /// as `ApiClientError::Transport` via the reqwest `From` impl. The stub
    /// arm cannot fail.
    pub async fn send(&self, request: &ResolvedRequest) -> Result<RawResponse, ApiClientError> {
        match self {
            Transport::Live(client) => {
                let mut builder = client.request(request.method.clone(), request.url.clone());
                for (name, value) in request.headers {
                    builder = builder.header(*name, *value);
                }

                let response = builder.send().await?;
                let status = response.status().as_u16();
                let body = response.text().await?;

                Ok(RawResponse { status, body })
            }
            Transport::Stub(stubs) => {
                let path = request.url.path();

                if let Some(stub) = stubs.lookup(path) {
                    trace!("Stub hit for {path}: HTTP {}", stub.status);
                    return Ok(RawResponse {
                        status: stub.status,
                        body: stub.body.clone(),
                    });
                }

                trace!("No stub for {path}, serving sample data");
                Ok(RawResponse {
                    status: 200,
                    body: request.sample.to_string(),
                })
            }
        }
    }
}
