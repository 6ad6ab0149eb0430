//! Direct reads against the deployed prediction contract.

use alloy_primitives::{Address, U256};
use alloy_provider::DynProvider;
use async_trait::async_trait;
use tracing::debug;

use super::abi::IPancakePredictionV2;
use super::call_error;
use super::rounds::{fetch_latest_user_rounds, fetch_user_rounds};
use super::settings::ROUNDS_PER_PAGE;
use crate::domain::{LedgerResponse, UserRounds};
use crate::error::{ContractError, Result};
use crate::port::outbound::contract::{PredictionContract, UserRoundsPage};

/// [`PredictionContract`] over an alloy provider.
pub struct AlloyPredictionContract {
    instance: IPancakePredictionV2::IPancakePredictionV2Instance<DynProvider>,
    page_size: u64,
}

impl AlloyPredictionContract {
    #[must_use]
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IPancakePredictionV2::new(address, provider),
            page_size: ROUNDS_PER_PAGE,
        }
    }

    /// Page size used by [`Self::user_rounds`] and [`Self::latest_user_rounds`].
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn address(&self) -> &Address {
        self.instance.address()
    }

    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// One page of `account`'s rounds starting at `cursor`.
    pub async fn user_rounds(&self, account: Address, cursor: u64) -> Result<Option<UserRounds>> {
        fetch_user_rounds(self, account, cursor, self.page_size).await
    }

    /// The most recent page of `account`'s rounds.
    pub async fn latest_user_rounds(&self, account: Address) -> Result<Option<UserRounds>> {
        fetch_latest_user_rounds(self, account, self.page_size).await
    }
}

#[async_trait]
impl PredictionContract for AlloyPredictionContract {
    async fn get_user_rounds(
        &self,
        account: Address,
        cursor: U256,
        size: U256,
    ) -> std::result::Result<UserRoundsPage, ContractError> {
        let page = self
            .instance
            .getUserRounds(account, cursor, size)
            .call()
            .await
            .map_err(|e| call_error("getUserRounds", e))?;

        debug!(%account, %cursor, rounds = page.epochs.len(), "Fetched user rounds page");

        Ok(UserRoundsPage {
            epochs: page.epochs,
            ledgers: page.bets.into_iter().map(LedgerResponse::from).collect(),
            cursor: page.nextCursor,
        })
    }

    async fn get_user_rounds_length(&self, account: Address) -> std::result::Result<U256, ContractError> {
        self.instance
            .getUserRoundsLength(account)
            .call()
            .await
            .map_err(|e| call_error("getUserRoundsLength", e))
    }
}
