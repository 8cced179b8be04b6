//! Environment-driven client configuration.
//!
//! The backend location is the only runtime configuration surface: it is
//! read once at boot from the environment and handed to the API client.
//! There are no flags, no files, and no persisted local state.

use std::env;

/// Environment variable naming the backend origin.
pub const BACKEND_URL_ENV: &str = "CONCIERGE_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    backend_url: String,
}

impl ClientConfig {
    /// Reads the configuration from the environment, falling back to the
    /// local development backend when the variable is unset.
    pub fn from_env() -> Self {
        let backend_url =
            env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::with_backend_url(backend_url)
    }

    /// Builds a configuration for an explicit backend origin.
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        let mut backend_url = backend_url.into();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self { backend_url }
    }

    /// The backend origin without a trailing slash.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// The API root all calls are made under.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}
