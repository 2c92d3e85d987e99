//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`mock::FixedClock`] - Clock pinned to a single instant

pub mod mock;
pub mod reqwest_http;

pub use mock::{FixedClock, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
