//! Client configuration

use std::sync::Arc;

use crate::gateway::Gateway;
use crate::store::RestStore;
use crate::{ClientError, ClientResult};

/// Passcode accepted when the settings row cannot be read
pub const DEFAULT_FALLBACK_PASSCODE: &str = "1234";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the remote store
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "https://project.supabase.co")
    pub store_url: String,

    /// Public API key sent as `apikey` and bearer token
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Passcode compared against when the store is unreachable
    pub fallback_passcode: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(store_url: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            fallback_passcode: DEFAULT_FALLBACK_PASSCODE.to_string(),
        }
    }

    /// Read configuration from the process environment
    ///
    /// - `KARMATAB_STORE_URL` (default `http://localhost:54321`)
    /// - `KARMATAB_STORE_KEY`
    /// - `KARMATAB_TIMEOUT_SECS` (default 30)
    /// - `KARMATAB_FALLBACK_PASSCODE` (default `1234`)
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("KARMATAB_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            api_key: std::env::var("KARMATAB_STORE_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            timeout: std::env::var("KARMATAB_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            fallback_passcode: std::env::var("KARMATAB_FALLBACK_PASSCODE")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_FALLBACK_PASSCODE.into()),
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the fallback passcode
    pub fn with_fallback_passcode(mut self, passcode: impl Into<String>) -> Self {
        self.fallback_passcode = passcode.into();
        self
    }

    /// Check the values a store connection depends on
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.store_url.starts_with("http://") || self.store_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "store url must be http(s): {}",
                self.store_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be at least 1 second".into()));
        }
        Ok(())
    }

    /// Create the REST store described by this configuration
    pub fn build_store(&self) -> ClientResult<RestStore> {
        self.validate()?;
        RestStore::new(self)
    }

    /// Create a gateway over the REST store
    pub fn build_gateway(&self) -> ClientResult<Gateway> {
        let store = self.build_store()?;
        Ok(Gateway::new(Arc::new(store)).with_fallback_passcode(self.fallback_passcode.clone()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:54321")
    }
}
