//! Client configuration

/// Configuration for connecting to the backend API.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | API_BASE_URL | http://localhost:8000 | Backend base URL |
/// | DEFAULT_GROUP_ID | (unset) | Group scope for post/order endpoints |
/// | REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000").
    pub base_url: String,

    /// Group identifier scoping the post/order endpoints.
    pub group_id: Option<String>,

    /// Bearer token for authentication.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            group_id: None,
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables, using defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            group_id: std::env::var("DEFAULT_GROUP_ID").ok(),
            token: None,
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the group identifier.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration.
    pub fn build(&self) -> super::ApiClient {
        super::ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
