//! Configuration for the API client.

use crate::{ClientError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable holding the server base URL.
pub const SERVER_URL_ENV: &str = "REGFORM_SERVER_URL";

/// Connection settings for the registration API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL; request paths are appended to it
    pub base_url: String,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with no extra headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Creates a new builder for `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reads the base URL from [`SERVER_URL_ENV`].
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(SERVER_URL_ENV)
            .map_err(|_| ClientError::Configuration(format!("{SERVER_URL_ENV} is not set")))?;
        let config = Self::new(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl(
                "base_url cannot be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{other}'"
            ))),
        }
    }
}

/// Builder for `ClientConfig`.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    headers: BTreeMap<String, String>,
}

impl ClientConfigBuilder {
    /// Sets the server base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            base_url: self
                .base_url
                .ok_or_else(|| ClientError::Configuration("base_url is required".to_string()))?,
            headers: self.headers,
        };
        config.validate()?;
        Ok(config)
    }
}
