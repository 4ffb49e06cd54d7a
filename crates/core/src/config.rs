//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! views. The intent is to avoid reading process-wide environment variables
//! while the client is running, which can lead to inconsistent behaviour in
//! multi-threaded runtimes and test harnesses.

/// Base URL used when neither a flag nor `PASSO_API_URL` provides one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Create a new `ClientConfig` from an explicit base URL.
    ///
    /// The URL is trimmed and any trailing slash removed so paths can be
    /// appended verbatim.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url
            .into()
            .trim()
            .trim_end_matches('/')
            .to_owned();

        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid("API base URL cannot be empty".into()));
        }

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API base URL must start with http:// or https:// (got {api_base_url})"
            )));
        }

        Ok(Self { api_base_url })
    }

    /// Resolve the base URL from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, falls back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        Self::new(value.unwrap_or_else(|| DEFAULT_API_URL.to_owned()))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
