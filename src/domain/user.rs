//! Aggregate statistics for one bettor address.

use serde::{Deserialize, Serialize};

/// Indexer snapshot of a user's betting activity.
///
/// Counts and block markers are `None` when the indexer did not provide a
/// numeric value. Amounts are display floats in BNB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub created_at: Option<u64>,
    pub updated_at: Option<u64>,
    pub block: Option<u64>,
    pub total_bets: Option<u64>,
    pub total_bets_bull: Option<u64>,
    pub total_bets_bear: Option<u64>,
    #[serde(rename = "totalBNB")]
    pub total_bnb: f64,
    #[serde(rename = "totalBNBBull")]
    pub total_bnb_bull: f64,
    #[serde(rename = "totalBNBBear")]
    pub total_bnb_bear: f64,
    pub total_bets_claimed: Option<u64>,
    #[serde(rename = "totalBNBClaimed")]
    pub total_bnb_claimed: f64,
    pub win_rate: f64,
    #[serde(rename = "averageBNB")]
    pub average_bnb: f64,
    #[serde(rename = "netBNB")]
    pub net_bnb: f64,
}
