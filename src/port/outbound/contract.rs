//! Direct (non-batched) reads against the prediction contract.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::LedgerResponse;
use crate::error::ContractError;

/// One page of `getUserRounds(account, cursor, size)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRoundsPage {
    /// Epochs the account entered, oldest first.
    pub epochs: Vec<U256>,
    /// Ledger entry for each epoch, aligned with `epochs`.
    pub ledgers: Vec<LedgerResponse>,
    /// Cursor to continue from.
    pub cursor: U256,
}

/// Sequential reads used to page through a user's rounds.
///
/// Errors stay typed so callers can tell a contract revert (no such page)
/// from a transport failure.
#[async_trait]
pub trait PredictionContract: Send + Sync {
    async fn get_user_rounds(
        &self,
        account: Address,
        cursor: U256,
        size: U256,
    ) -> Result<UserRoundsPage, ContractError>;

    async fn get_user_rounds_length(&self, account: Address) -> Result<U256, ContractError>;
}
