//! Prediction contract configuration.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Public BNB Smart Chain RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.binance.org";

/// BNB prediction contract on BNB Smart Chain.
pub const DEFAULT_PREDICTION_ADDRESS: &str = "0x18B2A687610328590Bc8F2e5fEdDe3b582A49cdA";

/// Canonical Multicall3 deployment.
pub const DEFAULT_MULTICALL_ADDRESS: &str = "0xcA11bde05977b3631167028862bE2a173976CA11";

/// Default page size for `getUserRounds`.
pub const ROUNDS_PER_PAGE: u64 = 1000;

/// Contract runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// JSON-RPC endpoint used for all reads.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Deployed prediction contract.
    #[serde(default = "default_prediction_address")]
    pub prediction_address: String,
    /// Multicall3 contract used for batched reads.
    #[serde(default = "default_multicall_address")]
    pub multicall_address: String,
    /// Page size when walking a user's rounds.
    #[serde(default = "default_rounds_per_page")]
    pub rounds_per_page: u64,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.into()
}

fn default_prediction_address() -> String {
    DEFAULT_PREDICTION_ADDRESS.into()
}

fn default_multicall_address() -> String {
    DEFAULT_MULTICALL_ADDRESS.into()
}

const fn default_rounds_per_page() -> u64 {
    ROUNDS_PER_PAGE
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            prediction_address: default_prediction_address(),
            multicall_address: default_multicall_address(),
            rounds_per_page: default_rounds_per_page(),
        }
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Address::from_str(value.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

impl ContractConfig {
    /// Parsed prediction contract address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or not valid hex.
    pub fn prediction_address(&self) -> Result<Address> {
        parse_address("prediction_address", &self.prediction_address)
    }

    /// Parsed Multicall3 address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or not valid hex.
    pub fn multicall_address(&self) -> Result<Address> {
        parse_address("multicall_address", &self.multicall_address)
    }

    /// Parsed RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or malformed.
    pub fn rpc_url(&self) -> Result<url::Url> {
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        self.rpc_url
            .trim()
            .parse()
            .map_err(|e: url::ParseError| {
                ConfigError::InvalidValue {
                    field: "rpc_url",
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
