/*
[INPUT]:  YAML configuration file and credential overrides
[OUTPUT]: Validated client configuration and credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use huobi_swap_cross_adapter::{ClientConfig, Credentials, DEFAULT_HOST, DEFAULT_SPOT_HOST};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding `access_key`
pub const ACCESS_KEY_ENV: &str = "HUOBI_ACCESS_KEY";
/// Environment variable overriding `secret_key`
pub const SECRET_KEY_ENV: &str = "HUOBI_SECRET_KEY";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Swap API base URL
    #[serde(default = "default_host")]
    pub host: String,
    /// Spot API base URL, used for spot <-> swap transfers
    #[serde(default = "default_spot_host")]
    pub spot_host: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_spot_host() -> String {
    DEFAULT_SPOT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Replace credentials with non-empty overrides
    pub fn with_credential_overrides(
        mut self,
        access_key: Option<String>,
        secret_key: Option<String>,
    ) -> Self {
        if let Some(access_key) = access_key.filter(|value| !value.is_empty()) {
            self.access_key = access_key;
        }
        if let Some(secret_key) = secret_key.filter(|value| !value.is_empty()) {
            self.secret_key = secret_key;
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.host).with_context(|| format!("invalid host: {}", self.host))?;
        Url::parse(&self.spot_host)
            .with_context(|| format!("invalid spot_host: {}", self.spot_host))?;
        if self.access_key.is_empty() {
            bail!("access_key is required (config file or {ACCESS_KEY_ENV})");
        }
        if self.secret_key.is_empty() {
            bail!("secret_key is required (config file or {SECRET_KEY_ENV})");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.access_key, &self.secret_key)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            spot_host: self.spot_host.clone(),
            ..ClientConfig::default()
        }
    }
}
