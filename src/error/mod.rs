//! Error handling for blogdeck.
//!
//! - [`NetworkError`]: transport failures, non-2xx statuses, bad bodies.
//!   Carries `is_retryable`, `user_message` and an `E_NET_*` code.
//! - [`BlogError`]: the library-wide error, wrapping `NetworkError` and
//!   adding `NotFound`, validation, I/O and JSON failures.
//! - [`BlogResult<T>`]: result alias used across the crate.
//!
//! Binaries report through `color_eyre`.
//!
//! | Error | Retryable |
//! |-------|-----------|
//! | Connection / timeout | Yes |
//! | HTTP 5xx, 408, 429 | Yes |
//! | HTTP 4xx, not found | No |
//! | Invalid response / URL | No |
//! | Validation | No |

mod blog_error;
mod network;

pub use blog_error::{BlogError, BlogResult};
pub use network::NetworkError;
