use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while reading the prediction contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The node executed the call and it reverted.
    #[error("{method} reverted: {reason}")]
    Reverted { method: &'static str, reason: String },

    /// The call never produced a result (transport, RPC or encoding failure).
    #[error("{method} failed: {reason}")]
    Call { method: &'static str, reason: String },

    #[error("failed to decode {method} result: {reason}")]
    Decode { method: &'static str, reason: String },

    #[error("multicall returned {actual} results for {expected} calls")]
    ResultCount { expected: usize, actual: usize },
}

impl ContractError {
    /// True when the contract itself rejected the call.
    #[must_use]
    pub const fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted { .. })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
