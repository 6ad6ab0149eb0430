//! Subgraph endpoint configuration.

use serde::Deserialize;

/// Public PancakeSwap prediction (BNB) subgraph.
pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/pancakeswap/prediction-v2";

/// Subgraph HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubgraphHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3000
}

impl Default for SubgraphHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Indexing service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubgraphConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_subgraph_url")]
    pub url: String,
    #[serde(default)]
    pub http: SubgraphHttpConfig,
}

fn default_subgraph_url() -> String {
    DEFAULT_SUBGRAPH_URL.into()
}

impl Default for SubgraphConfig {
    fn default() -> Self {
        Self {
            url: default_subgraph_url(),
            http: SubgraphHttpConfig::default(),
        }
    }
}
