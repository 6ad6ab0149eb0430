//! Enumerations shared by the indexer and on-chain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of a bet, and the winning side of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetPosition {
    Bull,
    Bear,
}

impl BetPosition {
    /// Map the contract's position code (`0` = Bull, `1` = Bear).
    ///
    /// Any non-zero code is treated as Bear.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        if code == 0 {
            Self::Bull
        } else {
            Self::Bear
        }
    }

    /// Winning side for a settled round: Bull only on a strict price increase.
    #[must_use]
    pub fn resolved(lock_price: f64, close_price: f64) -> Self {
        if close_price > lock_price {
            Self::Bull
        } else {
            Self::Bear
        }
    }
}

impl fmt::Display for BetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bull => write!(f, "Bull"),
            Self::Bear => write!(f, "Bear"),
        }
    }
}

/// Outcome of a bet from the bettor's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Lose,
    Canceled,
    Live,
}

/// Claim-status filter applied to a bet history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    #[default]
    All,
    Collected,
    Uncollected,
}

impl FromStr for HistoryFilter {
    type Err = std::convert::Infallible;

    /// Unrecognized filters fall back to [`HistoryFilter::All`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "collected" => Self::Collected,
            "uncollected" => Self::Uncollected,
            _ => Self::All,
        })
    }
}

/// Whether the prediction contract is accepting bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Live,
    Paused,
}

impl PredictionStatus {
    #[must_use]
    pub const fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Live
        }
    }
}
