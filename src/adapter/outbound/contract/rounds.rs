//! Paging through the rounds a user entered, straight from the contract.
//!
//! `getUserRounds` reverts once the cursor runs past the end of the user's
//! history. That revert is the normal "no more pages" signal and maps to
//! `Ok(None)`; transport or decoding failures are still returned as errors.

use alloy_primitives::{Address, U256};
use tracing::{debug, info};

use crate::domain::{serialize_predictions_ledger_response, UserRounds};
use crate::error::{ContractError, Result};
use crate::port::outbound::contract::PredictionContract;

fn revert_as_none<T>(
    method: &'static str,
    result: std::result::Result<T, ContractError>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_revert() => {
            debug!(method, error = %err, "Contract reverted, treating as no data");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// One page of a user's rounds, keyed by epoch.
///
/// Returns `Ok(None)` when the contract reverts (cursor past the end).
pub async fn fetch_user_rounds<C>(
    contract: &C,
    account: Address,
    cursor: u64,
    size: u64,
) -> Result<Option<UserRounds>>
where
    C: PredictionContract + ?Sized,
{
    info!(%account, cursor, size, "Fetching user rounds");

    let page = contract
        .get_user_rounds(account, U256::from(cursor), U256::from(size))
        .await;
    let Some(page) = revert_as_none("getUserRounds", page)? else {
        return Ok(None);
    };

    if page.epochs.len() != page.ledgers.len() {
        return Err(ContractError::ResultCount {
            expected: page.epochs.len(),
            actual: page.ledgers.len(),
        }
        .into());
    }

    let rounds: UserRounds = page
        .epochs
        .iter()
        .zip(&page.ledgers)
        .map(|(epoch, ledger)| {
            (
                epoch.to_string(),
                serialize_predictions_ledger_response(ledger),
            )
        })
        .collect();

    debug!(rounds = rounds.len(), "Fetched user rounds");
    Ok(Some(rounds))
}

/// The most recent page (at most `size` rounds) of a user's history.
///
/// Returns `Ok(None)` for a user with no rounds, without a second call.
pub async fn fetch_latest_user_rounds<C>(
    contract: &C,
    account: Address,
    size: u64,
) -> Result<Option<UserRounds>>
where
    C: PredictionContract + ?Sized,
{
    let length = contract.get_user_rounds_length(account).await;
    let Some(length) = revert_as_none("getUserRoundsLength", length)? else {
        return Ok(None);
    };

    if length.is_zero() {
        debug!(%account, "User has no rounds");
        return Ok(None);
    }

    let cursor = length
        .saturating_sub(U256::from(size))
        .saturating_to::<u64>();
    fetch_user_rounds(contract, account, cursor, size).await
}
