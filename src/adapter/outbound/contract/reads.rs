//! Batched reads of the prediction contract.
//!
//! Each operation turns its inputs into one [`Call`] per epoch (or per
//! static field) and submits them through the [`Multicall`] port in a single
//! round trip. Results come back in call order and are zipped onto the input
//! epochs; a short or long result list is rejected rather than misaligned.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use super::abi::IPancakePredictionV2::{
    bufferSecondsCall, claimableCall, currentEpochCall, intervalSecondsCall, ledgerCall,
    minBetAmountCall, pausedCall, roundsCall,
};
use crate::domain::{
    make_ledger_data, make_round_data, serialize_predictions_rounds_response, LedgerData,
    LedgerResponse, MarketSnapshot, PredictionStatus, RoundData, RoundsResponse,
};
use crate::error::{ContractError, Result};
use crate::port::outbound::multicall::{Call, Multicall};

fn decode<C: SolCall>(data: &[u8]) -> Result<C::Return> {
    C::abi_decode_returns(data).map_err(|e| {
        ContractError::Decode {
            method: C::SIGNATURE,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Typed batch reads against one deployed prediction contract.
pub struct PredictionReads<M> {
    multicall: M,
    address: Address,
}

impl<M: Multicall> PredictionReads<M> {
    /// Bind the batch transport to the prediction contract at `address`.
    pub fn new(multicall: M, address: Address) -> Self {
        Self { multicall, address }
    }

    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    fn call<C: SolCall>(&self, call: &C) -> Call {
        Call {
            target: self.address,
            signature: C::SIGNATURE,
            calldata: call.abi_encode().into(),
        }
    }

    async fn submit(&self, batch: Vec<Call>) -> Result<Vec<Bytes>> {
        let expected = batch.len();
        let results = self.multicall.aggregate(batch).await?;
        if results.len() != expected {
            return Err(ContractError::ResultCount {
                expected,
                actual: results.len(),
            }
            .into());
        }
        Ok(results)
    }

    async fn batch<C: SolCall>(&self, calls: Vec<C>) -> Result<Vec<C::Return>> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }
        let batch: Vec<Call> = calls.into_iter().map(|call| self.call(&call)).collect();
        let results = self.submit(batch).await?;
        results.iter().map(|data| decode::<C>(data)).collect()
    }

    /// `ledger(epoch, account)` for each epoch, in input order.
    pub async fn get_ledger_data(
        &self,
        account: Address,
        epochs: &[u64],
    ) -> Result<Vec<LedgerResponse>> {
        info!(%account, epochs = epochs.len(), "Fetching ledger data");

        let calls = epochs
            .iter()
            .map(|&epoch| ledgerCall {
                epoch: U256::from(epoch),
                user: account,
            })
            .collect();

        let ledgers = self.batch(calls).await?;
        Ok(ledgers.into_iter().map(LedgerResponse::from).collect())
    }

    /// Ledger entries for `account` as [`LedgerData`], skipping epochs it did not enter.
    pub async fn get_account_ledger(&self, account: Address, epochs: &[u64]) -> Result<LedgerData> {
        let ledgers = self.get_ledger_data(account, epochs).await?;
        Ok(make_ledger_data(&account.to_string(), ledgers, epochs))
    }

    /// Whether `account` can claim a payout for each epoch.
    ///
    /// The contract's `claimable` also reports true for accounts that never
    /// bet on a round, so every epoch is checked against the ledger: an
    /// epoch is claimable only with a non-zero, unclaimed bet.
    pub async fn get_claim_statuses(
        &self,
        account: Address,
        epochs: &[u64],
    ) -> Result<BTreeMap<u64, bool>> {
        info!(%account, epochs = epochs.len(), "Fetching claim statuses");

        let calls = epochs
            .iter()
            .map(|&epoch| claimableCall {
                epoch: U256::from(epoch),
                user: account,
            })
            .collect();
        let claimable: Vec<bool> = self.batch(calls).await?;

        let ledgers = self.get_ledger_data(account, epochs).await?;

        let statuses: BTreeMap<u64, bool> = epochs
            .iter()
            .zip(claimable)
            .zip(ledgers)
            .map(|((&epoch, claimable), ledger)| {
                (
                    epoch,
                    claimable && !ledger.amount.is_zero() && !ledger.claimed,
                )
            })
            .collect();

        debug!(
            claimable = statuses.values().filter(|&&status| status).count(),
            "Resolved claim statuses"
        );
        Ok(statuses)
    }

    /// Current epoch, timing and pause state in one batch.
    pub async fn get_prediction_data(&self) -> Result<MarketSnapshot> {
        info!(address = %self.address, "Fetching prediction data");

        let batch = vec![
            self.call(&currentEpochCall {}),
            self.call(&intervalSecondsCall {}),
            self.call(&minBetAmountCall {}),
            self.call(&pausedCall {}),
            self.call(&bufferSecondsCall {}),
        ];
        let expected = batch.len();
        let results = self.multicall.aggregate(batch).await?;

        let [current_epoch, interval_seconds, min_bet_amount, paused, buffer_seconds] =
            results.as_slice()
        else {
            return Err(ContractError::ResultCount {
                expected,
                actual: results.len(),
            }
            .into());
        };

        let current_epoch: U256 = decode::<currentEpochCall>(current_epoch)?;
        let interval_seconds: U256 = decode::<intervalSecondsCall>(interval_seconds)?;
        let min_bet_amount: U256 = decode::<minBetAmountCall>(min_bet_amount)?;
        let paused: bool = decode::<pausedCall>(paused)?;
        let buffer_seconds: U256 = decode::<bufferSecondsCall>(buffer_seconds)?;

        Ok(MarketSnapshot {
            status: PredictionStatus::from_paused(paused),
            current_epoch: current_epoch.saturating_to::<u64>(),
            interval_seconds: interval_seconds.saturating_to::<u64>(),
            min_bet_amount: min_bet_amount.to_string(),
            buffer_seconds: buffer_seconds.saturating_to::<u64>(),
        })
    }

    /// `rounds(epoch)` for each epoch, in input order.
    pub async fn get_rounds_data(&self, epochs: &[u64]) -> Result<Vec<RoundsResponse>> {
        info!(epochs = epochs.len(), "Fetching rounds data");

        let calls = epochs
            .iter()
            .map(|&epoch| roundsCall {
                id: U256::from(epoch),
            })
            .collect();

        let rounds = self.batch(calls).await?;
        Ok(rounds.into_iter().map(RoundsResponse::from).collect())
    }

    /// Rounds for `epochs` serialized and keyed by epoch.
    pub async fn get_round_data(&self, epochs: &[u64]) -> Result<RoundData> {
        let rounds = self.get_rounds_data(epochs).await?;
        Ok(make_round_data(
            rounds.iter().map(serialize_predictions_rounds_response),
        ))
    }
}
