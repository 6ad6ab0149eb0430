//! Multicall3-backed batch transport.

use alloy_primitives::{Address, Bytes};
use alloy_provider::DynProvider;
use async_trait::async_trait;
use tracing::{debug, info};

use super::abi::IMulticall3;
use super::call_error;
use crate::error::Result;
use crate::port::outbound::multicall::{Call, Multicall};

/// Sends every batch as one `aggregate` eth_call.
pub struct AlloyMulticall {
    instance: IMulticall3::IMulticall3Instance<DynProvider>,
}

impl AlloyMulticall {
    #[must_use]
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IMulticall3::new(address, provider),
        }
    }

    #[must_use]
    pub fn address(&self) -> &Address {
        self.instance.address()
    }
}

#[async_trait]
impl Multicall for AlloyMulticall {
    async fn aggregate(&self, calls: Vec<Call>) -> Result<Vec<Bytes>> {
        let signature = calls.first().map_or("", |call| call.signature);
        info!(count = calls.len(), signature, "Submitting multicall batch");

        let batch: Vec<IMulticall3::Call> = calls
            .into_iter()
            .map(|call| IMulticall3::Call {
                target: call.target,
                callData: call.calldata,
            })
            .collect();

        let response = self
            .instance
            .aggregate(batch)
            .call()
            .await
            .map_err(|e| call_error("aggregate", e))?;

        debug!(
            block = %response.blockNumber,
            results = response.returnData.len(),
            "Multicall batch returned"
        );

        Ok(response.returnData)
    }
}
