//! Wiring from [`Config`] to concrete clients.

use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use tracing::info;

use crate::adapter::outbound::contract::settings::ContractConfig;
use crate::adapter::outbound::contract::{
    AlloyMulticall, AlloyPredictionContract, PredictionReads,
};
use crate::adapter::outbound::subgraph::SubgraphClient;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Subgraph client for the configured endpoint.
#[must_use]
pub fn subgraph_client(config: &Config) -> SubgraphClient {
    info!(url = %config.subgraph.url, "Using prediction subgraph");
    SubgraphClient::from_config(&config.subgraph)
}

/// Type-erased HTTP provider for the configured RPC endpoint.
///
/// # Errors
///
/// Returns an error if `rpc_url` is empty or malformed.
pub fn rpc_provider(config: &ContractConfig) -> Result<DynProvider> {
    let url = config.rpc_url()?;
    info!(rpc = %url, "Connecting RPC provider");
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Batched reads of the configured prediction contract through Multicall3.
///
/// # Errors
///
/// Returns an error if the RPC URL or either contract address is invalid.
pub fn prediction_reads(config: &Config) -> Result<PredictionReads<AlloyMulticall>> {
    let contract = &config.contract;
    let provider = rpc_provider(contract)?;
    let multicall = AlloyMulticall::new(contract.multicall_address()?, provider);
    Ok(PredictionReads::new(multicall, contract.prediction_address()?))
}

/// Direct reads of the configured prediction contract, paging user rounds
/// by `rounds_per_page`.
///
/// # Errors
///
/// Returns an error if the RPC URL or the prediction address is invalid.
pub fn prediction_contract(config: &Config) -> Result<AlloyPredictionContract> {
    let contract = &config.contract;
    let provider = rpc_provider(contract)?;
    Ok(
        AlloyPredictionContract::new(contract.prediction_address()?, provider)
            .with_page_size(contract.rounds_per_page),
    )
}
