//! Configuration and credential loading for the Messages API client.

use crate::error::ClientError;
use crate::{API_KEY_ENV_VAR, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Configuration for the Messages API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key for authentication
    pub api_key: SecretString,

    /// Base URL for the API (default: <https://api.anthropic.com>)
    pub base_url: String,

    /// API version (default: 2023-06-01)
    pub api_version: String,

    /// Request timeout (default: 600 seconds)
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::new("".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `ANTHROPIC_API_KEY` is required; absence (or an empty value) is a
    /// fatal precondition and yields a configuration error carrying the
    /// remediation text the binary prints before exiting. `ANTHROPIC_BASE_URL`,
    /// `ANTHROPIC_API_VERSION` and `ANTHROPIC_TIMEOUT` are optional overrides.
    ///
    /// The lookup is a pure read of the process environment: calling it
    /// twice under the same environment yields the same outcome.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var(API_KEY_ENV_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(ClientError::Configuration {
                message: missing_credential_message(),
            });
        }

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("ANTHROPIC_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(api_version) = std::env::var("ANTHROPIC_API_VERSION") {
            config.api_version = api_version;
        }

        if let Ok(timeout) = std::env::var("ANTHROPIC_TIMEOUT") {
            if let Ok(timeout_secs) = timeout.parse::<u64>() {
                config.timeout = Duration::from_secs(timeout_secs);
            }
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns true if the API key is non-empty
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

/// Remediation text printed when the API key is absent
pub fn missing_credential_message() -> String {
    format!(
        "ERROR: {var} environment variable is not set.\n\
         \n\
         Please set your API key:\n\
         \x20 export {var}='your-api-key-here'\n\
         \n\
         You can get an API key from: https://platform.claude.com/settings/keys",
        var = API_KEY_ENV_VAR
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_new_sets_api_key() {
        let config = ClientConfig::new("sk-ant-test123456789012345");
        assert!(config.has_api_key());
        assert_eq!(config.api_key.expose_secret(), "sk-ant-test123456789012345");
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("sk-ant-test123456789012345")
            .with_base_url("http://localhost:8080")
            .with_api_version("2024-01-01")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_version, "2024-01-01");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_credential_message_mentions_variable() {
        let message = missing_credential_message();
        assert!(message.starts_with("ERROR: ANTHROPIC_API_KEY"));
        assert!(message.contains("export ANTHROPIC_API_KEY"));
    }

    // Environment-dependent test: runs the lookup twice to cover both the
    // idempotence property and the missing/present outcomes. Kept in a
    // single test so no parallel test observes a half-mutated environment.
    #[test]
    fn test_from_env_is_idempotent() {
        std::env::remove_var(API_KEY_ENV_VAR);
        let first = ClientConfig::from_env();
        let second = ClientConfig::from_env();
        assert!(first.is_err());
        assert!(second.is_err());

        std::env::set_var(API_KEY_ENV_VAR, "sk-ant-test123456789012345");
        let first = ClientConfig::from_env();
        let second = ClientConfig::from_env();
        assert!(first.is_ok());
        assert!(second.is_ok());
        std::env::remove_var(API_KEY_ENV_VAR);
    }
}
