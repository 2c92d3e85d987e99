//! Runtime configuration.
//!
//! Defaults, then environment (`BLOGDECK_BASE_URL`, `BLOGDECK_LOG`,
//! `BLOGDECK_LOG_FILE`), then command-line flags applied by the caller.
//!
//! # Example
//!
//! ```ignore
//! use blogdeck::config::AppConfig;
//!
//! let config = AppConfig::from_env().with_base_url("http://localhost:4000");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

pub const ENV_BASE_URL: &str = "BLOGDECK_BASE_URL";
pub const ENV_LOG_FILTER: &str = "BLOGDECK_LOG";
pub const ENV_LOG_FILE: &str = "BLOGDECK_LOG_FILE";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the blog API, without a trailing slash
    pub base_url: String,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log destination; `None` disables logging for the TUI
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Defaults overridden by any `BLOGDECK_*` variables that are set.
    ///
    /// Empty values are ignored. `BLOGDECK_LOG_FILE=off` disables logging.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(filter) = get(ENV_LOG_FILTER) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = if path.eq_ignore_ascii_case("off") {
                config.with_log_file(None)
            } else {
                config.with_log_file(Some(PathBuf::from(path)))
            };
        }
        config
    }
}

/// `<data dir>/blogdeck/blogdeck.log`, or `None` if there is no data dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("blogdeck").join("blogdeck.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::new().with_base_url("http://api.test:8080/");
        assert_eq!(config.base_url, "http://api.test:8080");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://blog.internal"),
            (ENV_LOG_FILTER, "blogdeck=debug"),
            (ENV_LOG_FILE, "/tmp/blogdeck-test.log"),
        ]));
        assert_eq!(config.base_url, "http://blog.internal");
        assert_eq!(config.log_filter, "blogdeck=debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/blogdeck-test.log")));
    }

    #[test]
    fn test_lookup_ignores_empty_values() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "  ")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_log_file_off() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_FILE, "OFF")]));
        assert_eq!(config.log_file, None);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_BASE_URL, "http://from-env:9000");
        let config = AppConfig::from_env();
        std::env::remove_var(ENV_BASE_URL);
        assert_eq!(config.base_url, "http://from-env:9000");
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables_uses_defaults() {
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_LOG_FILTER);
        let config = AppConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
