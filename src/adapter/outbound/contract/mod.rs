//! Prediction contract integration.
//!
//! - [`abi`] - `sol!` bindings for the prediction contract and Multicall3
//! - [`multicall`] - [`AlloyMulticall`], the batched read transport
//! - [`prediction`] - [`AlloyPredictionContract`], direct reads
//! - [`reads`] - [`PredictionReads`], typed batches of ledger/round/market reads
//! - [`rounds`] - paging through a user's rounds

pub mod abi;
pub mod multicall;
pub mod prediction;
pub mod reads;
pub mod rounds;
pub mod settings;

pub use multicall::AlloyMulticall;
pub use prediction::AlloyPredictionContract;
pub use reads::PredictionReads;
pub use rounds::{fetch_latest_user_rounds, fetch_user_rounds};
pub use settings::ContractConfig;

use crate::error::ContractError;

/// Geth-style JSON-RPC code for `execution reverted` with revert data.
const REVERT_CODE: i64 = 3;

/// Classify an alloy call failure.
///
/// Only an error response describing an EVM revert is a revert. Other node
/// errors (rate limits, missing headers, unavailable state) are call
/// failures, as is anything that never reached the node.
pub(crate) fn call_error(method: &'static str, err: alloy_contract::Error) -> ContractError {
    let reverted = match &err {
        alloy_contract::Error::TransportError(transport) => {
            transport.as_error_resp().is_some_and(|payload| {
                payload.code == REVERT_CODE
                    || payload.as_revert_data().is_some()
                    || payload.message.to_ascii_lowercase().contains("revert")
            })
        }
        _ => false,
    };
    let reason = err.to_string();
    if reverted {
        ContractError::Reverted { method, reason }
    } else {
        ContractError::Call { method, reason }
    }
}
