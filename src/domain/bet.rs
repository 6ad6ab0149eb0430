//! A single wager as recorded by the indexer.

use serde::{Deserialize, Serialize};

use super::position::BetPosition;
use super::round::Round;
use super::user::User;

/// One bet, optionally carrying the user and round it belongs to.
///
/// `user` and `round` are only populated when the source query asked for
/// them; they are omitted from the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub id: String,
    pub hash: String,
    pub block: Option<u64>,
    pub amount: f64,
    pub position: BetPosition,
    pub claimed: bool,
    pub claimed_at: Option<u64>,
    pub claimed_block: Option<u64>,
    pub claimed_hash: Option<String>,
    #[serde(rename = "claimedBNB")]
    pub claimed_bnb: f64,
    #[serde(rename = "claimedNetBNB")]
    pub claimed_net_bnb: f64,
    pub created_at: Option<u64>,
    pub updated_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<Round>,
}
