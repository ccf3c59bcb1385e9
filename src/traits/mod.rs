//! Trait abstractions for dependency injection and testability.
//!
//! The one outbound collaborator of this application is the HTTP fetch;
//! putting it behind a trait lets the API client be exercised against an
//! in-memory transport in tests.

pub mod http;

pub use http::{HttpClient, HttpError, Response};
