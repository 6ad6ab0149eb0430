//! Live round and market state read from the prediction contract.

use std::collections::BTreeMap;

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};

use super::big_number::SerializedBigNumber;
use super::position::PredictionStatus;

/// Decoded `rounds(epoch)` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundsResponse {
    pub epoch: U256,
    pub start_timestamp: U256,
    pub lock_timestamp: U256,
    pub close_timestamp: U256,
    pub lock_price: I256,
    pub close_price: I256,
    pub lock_oracle_id: U256,
    pub close_oracle_id: U256,
    pub total_amount: U256,
    pub bull_amount: U256,
    pub bear_amount: U256,
    pub reward_base_cal_amount: U256,
    pub reward_amount: U256,
    pub oracle_called: bool,
}

/// Serializable round state.
///
/// Timestamps and prices are `None` until the round reaches that phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub epoch: u64,
    pub start_timestamp: Option<u64>,
    pub lock_timestamp: Option<u64>,
    pub close_timestamp: Option<u64>,
    pub lock_price: Option<SerializedBigNumber>,
    pub close_price: Option<SerializedBigNumber>,
    pub total_amount: SerializedBigNumber,
    pub bull_amount: SerializedBigNumber,
    pub bear_amount: SerializedBigNumber,
    pub reward_base_cal_amount: SerializedBigNumber,
    pub reward_amount: SerializedBigNumber,
    pub oracle_called: bool,
    pub lock_oracle_id: Option<String>,
    pub close_oracle_id: Option<String>,
}

/// Round snapshots keyed by epoch (decimal string).
pub type RoundData = BTreeMap<String, RoundSnapshot>;

/// Contract configuration and progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub status: PredictionStatus,
    pub current_epoch: u64,
    pub interval_seconds: u64,
    /// Minimum bet in wei, as a decimal string.
    pub min_bet_amount: String,
    pub buffer_seconds: u64,
}

fn timestamp(value: U256) -> Option<u64> {
    (!value.is_zero()).then(|| value.saturating_to::<u64>())
}

fn price(value: I256) -> Option<SerializedBigNumber> {
    (!value.is_zero()).then(|| value.into())
}

#[must_use]
pub fn serialize_predictions_rounds_response(response: &RoundsResponse) -> RoundSnapshot {
    RoundSnapshot {
        epoch: response.epoch.saturating_to::<u64>(),
        start_timestamp: timestamp(response.start_timestamp),
        lock_timestamp: timestamp(response.lock_timestamp),
        close_timestamp: timestamp(response.close_timestamp),
        lock_price: price(response.lock_price),
        close_price: price(response.close_price),
        total_amount: response.total_amount.into(),
        bull_amount: response.bull_amount.into(),
        bear_amount: response.bear_amount.into(),
        reward_base_cal_amount: response.reward_base_cal_amount.into(),
        reward_amount: response.reward_amount.into(),
        oracle_called: response.oracle_called,
        lock_oracle_id: Some(response.lock_oracle_id.to_string()),
        close_oracle_id: Some(response.close_oracle_id.to_string()),
    }
}

/// Index snapshots by epoch; a later snapshot replaces an earlier one.
pub fn make_round_data<I>(rounds: I) -> RoundData
where
    I: IntoIterator<Item = RoundSnapshot>,
{
    let mut data = RoundData::new();
    for round in rounds {
        data.insert(round.epoch.to_string(), round);
    }
    data
}

/// Placeholder for an epoch the contract has not started yet.
#[must_use]
pub fn make_future_round_response(epoch: u64, start_timestamp: u64) -> RoundSnapshot {
    RoundSnapshot {
        epoch,
        start_timestamp: Some(start_timestamp),
        lock_timestamp: None,
        close_timestamp: None,
        lock_price: None,
        close_price: None,
        total_amount: SerializedBigNumber::zero(),
        bull_amount: SerializedBigNumber::zero(),
        bear_amount: SerializedBigNumber::zero(),
        reward_base_cal_amount: SerializedBigNumber::zero(),
        reward_amount: SerializedBigNumber::zero(),
        oracle_called: false,
        lock_oracle_id: None,
        close_oracle_id: None,
    }
}
