//! Bet history port.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{Bet, User};
use crate::error::Result;

/// Arbitrary subgraph `where` predicate, e.g. `{"user": "0xabc", "claimed": false}`.
pub type WhereClause = Map<String, Value>;

/// Default bet history page size.
pub const BET_HISTORY_PAGE_SIZE: u32 = 1000;

/// Pagination window for history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPage {
    pub first: u32,
    pub skip: u32,
}

impl Default for HistoryPage {
    fn default() -> Self {
        Self {
            first: BET_HISTORY_PAGE_SIZE,
            skip: 0,
        }
    }
}

/// Source of normalized historical data.
#[async_trait]
pub trait BetHistorySource: Send + Sync {
    /// Total paid out to winners, net of treasury fees, never negative.
    async fn total_won(&self) -> Result<f64>;

    /// Bets matching `filter`, newest first, with round and user attached.
    async fn bets(&self, filter: &WhereClause, page: HistoryPage) -> Result<Vec<Bet>>;

    /// A single bet, or `None` when the id is unknown.
    async fn bet(&self, bet_id: &str) -> Result<Option<Bet>>;

    /// A single user's aggregate statistics, or `None` when unknown.
    async fn user(&self, account: &str) -> Result<Option<User>>;
}
