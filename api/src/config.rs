//! Client configuration.

use std::time::Duration;

/// Base URL used when `TODOO_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "TODOO_API_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "TODOO_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`HttpTodoApi`](crate::HttpTodoApi).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server base URL, with or without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] and a 30 second timeout for
    /// anything unset. An unparseable timeout is logged and ignored rather
    /// than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(
                        variable = ENV_TIMEOUT_SECS,
                        value = %raw,
                        "ignoring unparseable timeout override, using default"
                    );
                    DEFAULT_TIMEOUT
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };

        Self { base_url, timeout }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join a path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:4000/");
        assert_eq!(config.endpoint("todos"), "http://localhost:4000/todos");

        let config = ApiConfig::new("http://localhost:4000");
        assert_eq!(
            config.endpoint("todos/stats"),
            "http://localhost:4000/todos/stats"
        );
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ApiConfig::new("http://example.test").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
