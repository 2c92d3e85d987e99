//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`Clock`] - Source of the current time for stamping new posts

pub mod clock;
pub mod http;

pub use clock::{Clock, SystemClock};
pub use http::{Headers, HttpClient, HttpError, Response};
