//! One market epoch as recorded by the indexer.

use serde::{Deserialize, Serialize};

use super::bet::Bet;
use super::position::BetPosition;

/// Indexer view of a round.
///
/// `position` is the side the indexer recorded as winning, `None` while the
/// round is unresolved or when it ended without a winner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub epoch: Option<u64>,
    pub failed: bool,
    pub position: Option<BetPosition>,
    pub start_at: Option<u64>,
    pub start_block: Option<u64>,
    pub start_hash: Option<String>,
    pub lock_at: Option<u64>,
    pub lock_block: Option<u64>,
    pub lock_hash: Option<String>,
    pub lock_price: f64,
    pub lock_round_id: Option<String>,
    pub close_at: Option<u64>,
    pub close_block: Option<u64>,
    pub close_hash: Option<String>,
    pub close_price: f64,
    pub close_round_id: Option<String>,
    pub total_bets: Option<u64>,
    pub total_amount: f64,
    pub bull_bets: Option<u64>,
    pub bull_amount: f64,
    pub bear_bets: Option<u64>,
    pub bear_amount: f64,
    #[serde(default)]
    pub bets: Vec<Bet>,
}

impl Round {
    /// Winning side derived from the lock and close prices.
    ///
    /// Only meaningful once the round has closed.
    #[must_use]
    pub fn resolved_position(&self) -> BetPosition {
        BetPosition::resolved(self.lock_price, self.close_price)
    }
}
