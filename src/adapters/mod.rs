//! Concrete implementations of trait abstractions.
//!
//! Production adapter:
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! Test double:
//! - [`MockHttpClient`] - configurable in-memory responses

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
