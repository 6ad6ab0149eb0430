//! Per-epoch bet records read from the prediction contract.

use std::collections::BTreeMap;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::big_number::SerializedBigNumber;
use super::position::BetPosition;

/// Decoded `ledger(epoch, account)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerResponse {
    /// Contract position code: `0` = Bull, `1` = Bear.
    pub position: u8,
    pub amount: U256,
    pub claimed: bool,
}

/// Serializable ledger entry for one account and epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub position: BetPosition,
    pub amount: SerializedBigNumber,
    pub claimed: bool,
}

/// Rounds a user entered, keyed by epoch (decimal string).
pub type UserRounds = BTreeMap<String, LedgerEntry>;

#[must_use]
pub fn serialize_predictions_ledger_response(response: &LedgerResponse) -> LedgerEntry {
    LedgerEntry {
        position: BetPosition::from_code(response.position),
        amount: response.amount.into(),
        claimed: response.claimed,
    }
}

/// Ledger entries keyed by account, then by epoch (decimal string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerData(BTreeMap<String, UserRounds>);

impl LedgerData {
    #[must_use]
    pub fn get(&self, account: &str, epoch: u64) -> Option<&LedgerEntry> {
        self.0.get(account)?.get(&epoch.to_string())
    }

    /// All entries recorded for `account`.
    #[must_use]
    pub fn account(&self, account: &str) -> Option<&UserRounds> {
        self.0.get(account)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, UserRounds> {
        self.0
    }
}

/// Build [`LedgerData`] for `account` from ledger reads aligned with `epochs`.
///
/// Absent entries and zero amounts (the account did not bet that epoch) are
/// skipped. An account with no remaining entry does not appear at all.
pub fn make_ledger_data<I>(account: &str, ledgers: I, epochs: &[u64]) -> LedgerData
where
    I: IntoIterator,
    I::Item: Into<Option<LedgerResponse>>,
{
    let mut data: BTreeMap<String, UserRounds> = BTreeMap::new();

    for (ledger, epoch) in ledgers.into_iter().zip(epochs) {
        let Some(ledger) = ledger.into() else {
            continue;
        };
        if ledger.amount.is_zero() {
            continue;
        }
        data.entry(account.to_string())
            .or_default()
            .insert(epoch.to_string(), serialize_predictions_ledger_response(&ledger));
    }

    LedgerData(data)
}
