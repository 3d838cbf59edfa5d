//! Credential and endpoint configuration for the provider API.

use crate::errors::Error;

/// Production base URL for the provider API.
pub const DEFAULT_BASE_URL: &str = "https://apidojo-yahoo-finance-v1.p.rapidapi.com";

/// Configuration for the provider API: the two credential headers and the
/// base URL. Built explicitly so tests can inject fixtures without touching
/// the process environment; [`Config::from_env`] is a convenience on top.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) api_host: String,
    pub(crate) base_url: String,
}

impl Config {
    /// Creates a configuration pointing at the production API.
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Reads credentials from the `RAPIDAPI_KEY` and `RAPIDAPI_HOST`
    /// environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = require_env("RAPIDAPI_KEY")?;
        let api_host = require_env("RAPIDAPI_HOST")?;
        Ok(Self::new(api_key, api_host))
    }
}

fn require_env(key: &str) -> Result<String, Error> {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(Error::Config(format!(
            "environment variable {} is not set",
            key
        ))),
    }
}
