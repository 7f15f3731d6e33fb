//! Declarative endpoint descriptors.
//!
//! An endpoint is pure data: resolving a variant to its request parameters
//! never fails and never touches the network. Adding a request means adding
//! a variant here, not registering anything at runtime.

use crate::API_BASE_URL;

use reqwest::Method;

/// Headers shared by every user directory request.
const JSON_HEADERS: &[(&str, &str)] = &[("Content-Type", "application/json")];

/// Canned list payload served by stub mode when no explicit stub is registered.
const SAMPLE_USERS: &str = r#"[
  {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
  {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
]"#;

/// Canned detail payload served by stub mode when no explicit stub is registered.
const SAMPLE_USER_DETAIL: &str =
    r#"{"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"}"#;

/// A logical request that can be resolved to concrete HTTP call parameters.
///
/// Resolution is total: every method here must succeed for any well-formed
/// descriptor value.
pub trait Endpoint {
    /// Absolute base address for this descriptor family.
    fn base_url(&self) -> &'static str;

    /// Relative path, with any variant parameters interpolated.
    fn path(&self) -> String;

    /// HTTP method for the variant.
    fn method(&self) -> Method;

    /// Fixed request headers.
    fn headers(&self) -> &'static [(&'static str, &'static str)];

    /// Payload returned by the stub transport when no stub is registered
    /// for the resolved path.
    fn sample_data(&self) -> &'static str;
}

/// The closed set of user directory requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserApi {
    /// `GET /users` - the full user list.
    GetUsers,

    /// `GET /users/{id}` - one user's detail.
    GetUserDetail { id: i64 },
}

impl Endpoint for UserApi {
    fn base_url(&self) -> &'static str {
        API_BASE_URL
    }

    fn path(&self) -> String {
        match self {
            UserApi::GetUsers => "/users".to_string(),
            UserApi::GetUserDetail { id } => format!("/users/{id}"),
        }
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> &'static [(&'static str, &'static str)] {
        JSON_HEADERS
    }

    fn sample_data(&self) -> &'static str {
        match self {
            UserApi::GetUsers => SAMPLE_USERS,
            UserApi::GetUserDetail { .. } => SAMPLE_USER_DETAIL,
        }
    }
}
