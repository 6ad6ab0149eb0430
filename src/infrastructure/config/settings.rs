//! Configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates subgraph, contract and
//! logging settings. Configuration is loaded from a TOML file; every section
//! is optional and falls back to the public BNB Smart Chain deployment.
//! Endpoint URLs can be overridden with `PREDICTIONS_SUBGRAPH_URL` and
//! `PREDICTIONS_RPC_URL`.
//!
//! # Example
//!
//! ```no_run
//! use predictions_data::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::adapter::outbound::contract::settings::ContractConfig;
use crate::adapter::outbound::subgraph::settings::SubgraphConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`SubgraphConfig::url`].
pub const SUBGRAPH_URL_ENV: &str = "PREDICTIONS_SUBGRAPH_URL";

/// Environment variable overriding [`ContractConfig::rpc_url`].
pub const RPC_URL_ENV: &str = "PREDICTIONS_RPC_URL";

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Indexing service endpoint and HTTP settings.
    #[serde(default)]
    pub subgraph: SubgraphConfig,

    /// RPC endpoint, contract addresses and paging.
    #[serde(default)]
    pub contract: ContractConfig,
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Parse configuration from TOML content, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(url) = env_override(SUBGRAPH_URL_ENV) {
            debug!(env = SUBGRAPH_URL_ENV, "Overriding subgraph URL");
            config.subgraph.url = url;
        }
        if let Some(url) = env_override(RPC_URL_ENV) {
            debug!(env = RPC_URL_ENV, "Overriding RPC URL");
            config.contract.rpc_url = url;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.subgraph.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "subgraph.url" }.into());
        }
        url::Url::parse(self.subgraph.url.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "subgraph.url",
            reason: e.to_string(),
        })?;
        if self.subgraph.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.contract.rpc_url()?;
        self.contract.prediction_address()?;
        self.contract.multicall_address()?;
        if self.contract.rounds_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rounds_per_page",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize the global tracing subscriber from [`Config::logging`].
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
