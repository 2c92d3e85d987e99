//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`FixedClock`] - Clock that always reports the same instant

pub mod clock;
pub mod http;

pub use clock::FixedClock;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
