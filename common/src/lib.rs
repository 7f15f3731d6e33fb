//! Domain models for Roster.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure data structures
//! - **client-core**: Request building, execution and decoding
//! - **roster**: Application wiring everything together
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod error;
pub mod http_status;
pub mod timestamp;
pub mod user;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use user::User;

#[cfg(test)]
mod tests;
