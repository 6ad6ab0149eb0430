//! Batched read port.

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;

use crate::error::Result;

/// One encoded read-only contract call inside a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Contract the call is sent to.
    pub target: Address,
    /// Solidity signature of the called function, e.g. `ledger(uint256,address)`.
    pub signature: &'static str,
    /// ABI-encoded selector and arguments.
    pub calldata: Bytes,
}

/// Executes a list of calls in a single round trip.
///
/// Implementations return one raw result per call, in call order. A failure
/// of any call fails the whole batch.
#[async_trait]
pub trait Multicall: Send + Sync {
    async fn aggregate(&self, calls: Vec<Call>) -> Result<Vec<Bytes>>;
}
