//! The user record returned by the directory API.

use serde::{Deserialize, Serialize};

/// A single user as decoded from a response body.
///
/// Immutable value type - there is no lifecycle beyond decode. Wire payloads
/// may spell the fields in camelCase; client-core normalizes keys to
/// snake_case before this type ever sees them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique, stable identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login handle
    pub username: String,

    /// Contact email
    pub email: String,
}
