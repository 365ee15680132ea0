//! Bootstrap configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use miniapp_acquirer::AcquirerConfig;
use miniapp_utils::LogFormat;
use miniapp_verifier::VerifierClient;

use crate::BootstrapError;

/// Configuration for a bootstrap run.
///
/// Can be loaded from a TOML file via [`BootstrapConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Base URL of the backend hosting `/auth/init`.
    #[serde(default = "default_endpoint_base_url")]
    pub endpoint_base_url: String,

    /// Wait between host object polls, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Bound on host object polling, in milliseconds. Zero disables polling.
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,

    /// Whether init data is accepted from the page's query string.
    ///
    /// That path is meant for local demos; turn it off in production.
    #[serde(default = "default_true")]
    pub enable_url_query: bool,

    /// Client-side timeout for the verification request. Unset means the
    /// request may wait forever.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_endpoint_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_poll_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl BootstrapConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, BootstrapError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BootstrapError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BootstrapError> {
        toml::from_str(s).map_err(|e| BootstrapError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, BootstrapError> {
        toml::to_string_pretty(self).map_err(|e| BootstrapError::Config(e.to_string()))
    }

    /// Reject values a run cannot work with.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        let endpoint = url::Url::parse(&self.endpoint_base_url).map_err(|e| {
            BootstrapError::Config(format!(
                "endpoint_base_url {:?}: {e}",
                self.endpoint_base_url
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(BootstrapError::Config(format!(
                "endpoint_base_url must be http or https, got {}",
                endpoint.scheme()
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(BootstrapError::Config(
                "poll_interval_ms must be greater than zero".into(),
            ));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(BootstrapError::Config(
                "request_timeout_ms must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }

    pub fn acquirer_config(&self) -> AcquirerConfig {
        AcquirerConfig {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            poll_timeout: Duration::from_millis(self.poll_timeout_ms),
            enable_url_query: self.enable_url_query,
        }
    }

    pub fn verifier_client(&self) -> VerifierClient {
        match self.request_timeout_ms {
            Some(ms) => {
                VerifierClient::with_timeout(&self.endpoint_base_url, Duration::from_millis(ms))
            }
            None => VerifierClient::new(&self.endpoint_base_url),
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            endpoint_base_url: default_endpoint_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            poll_timeout_ms: default_poll_timeout_ms(),
            enable_url_query: default_true(),
            request_timeout_ms: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
