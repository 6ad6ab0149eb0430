//! Prediction subgraph response types and their domain conversions.
//!
//! The subgraph serves `BigInt`/`BigDecimal` scalars as JSON strings, but
//! some deployments return plain numbers for `Int` fields. Every scalar is
//! therefore read through [`scalar`], which accepts either and keeps the raw
//! text; conversion to numbers happens in the `From` impls below.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::numeric::{float_or_zero, number_or_null};
use crate::domain::{Bet, BetPosition, Round, User};

fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    #[serde(default, deserialize_with = "scalar")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_bets: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_bets_bull: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_bets_bear: Option<String>,
    #[serde(default, rename = "totalBNB", deserialize_with = "scalar")]
    pub total_bnb: Option<String>,
    #[serde(default, rename = "totalBNBBull", deserialize_with = "scalar")]
    pub total_bnb_bull: Option<String>,
    #[serde(default, rename = "totalBNBBear", deserialize_with = "scalar")]
    pub total_bnb_bear: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_bets_claimed: Option<String>,
    #[serde(default, rename = "totalBNBClaimed", deserialize_with = "scalar")]
    pub total_bnb_claimed: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub win_rate: Option<String>,
    #[serde(default, rename = "averageBNB", deserialize_with = "scalar")]
    pub average_bnb: Option<String>,
    #[serde(default, rename = "netBNB", deserialize_with = "scalar")]
    pub net_bnb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetResponse {
    pub id: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default, deserialize_with = "scalar")]
    pub block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub position: Option<String>,
    #[serde(default)]
    pub claimed: bool,
    #[serde(default, deserialize_with = "scalar")]
    pub claimed_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub claimed_block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub claimed_hash: Option<String>,
    #[serde(default, rename = "claimedBNB", deserialize_with = "scalar")]
    pub claimed_bnb: Option<String>,
    #[serde(default, rename = "claimedNetBNB", deserialize_with = "scalar")]
    pub claimed_net_bnb: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserResponse>,
    #[serde(default)]
    pub round: Option<RoundResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResponse {
    pub id: String,
    #[serde(default, deserialize_with = "scalar")]
    pub epoch: Option<String>,
    #[serde(default)]
    pub failed: Option<bool>,
    #[serde(default, deserialize_with = "scalar")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub start_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub start_block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub start_hash: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub lock_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub lock_block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub lock_hash: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub lock_price: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub lock_round_id: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub close_at: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub close_block: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub close_hash: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub close_price: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub close_round_id: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_bets: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub total_amount: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub bull_bets: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub bull_amount: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub bear_bets: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub bear_amount: Option<String>,
    #[serde(default)]
    pub bets: Option<Vec<BetResponse>>,
}

/// Singleton market aggregate (`market(id: 1)`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketTotals {
    #[serde(default, rename = "totalBNB", deserialize_with = "scalar")]
    pub total_bnb: Option<String>,
    #[serde(default, rename = "totalBNBTreasury", deserialize_with = "scalar")]
    pub total_bnb_treasury: Option<String>,
}

impl MarketTotals {
    /// Amount won by bettors: total volume minus the treasury cut, floored at zero.
    #[must_use]
    pub fn total_won(&self) -> f64 {
        let won = (decimal_or_zero(self.total_bnb.as_deref())
            - decimal_or_zero(self.total_bnb_treasury.as_deref()))
        .max(Decimal::ZERO);
        won.to_f64().unwrap_or(0.0)
    }
}

fn decimal_or_zero(value: Option<&str>) -> Decimal {
    value
        .and_then(|raw| Decimal::from_str(raw.trim()).ok())
        .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Deserialize)]
pub(super) struct TotalWonData {
    pub market: Option<MarketTotals>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BetHistoryData {
    #[serde(default)]
    pub bets: Vec<BetResponse>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BetData {
    pub bet: Option<BetResponse>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UsersData {
    #[serde(default)]
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserData {
    pub user: Option<UserResponse>,
}

// ---------------------------------------------------------------------------
// Domain conversions
// ---------------------------------------------------------------------------

/// Map the indexer's round position text; anything but `Bull`/`Bear` is `None`.
#[must_use]
pub fn get_round_position(position: Option<&str>) -> Option<BetPosition> {
    match position? {
        "Bull" => Some(BetPosition::Bull),
        "Bear" => Some(BetPosition::Bear),
        _ => None,
    }
}

fn bet_position(position: Option<&str>) -> BetPosition {
    if position == Some("Bull") {
        BetPosition::Bull
    } else {
        BetPosition::Bear
    }
}

impl From<UserResponse> for User {
    fn from(r: UserResponse) -> Self {
        Self {
            created_at: number_or_null(r.created_at.as_deref()),
            updated_at: number_or_null(r.updated_at.as_deref()),
            block: number_or_null(r.block.as_deref()),
            total_bets: number_or_null(r.total_bets.as_deref()),
            total_bets_bull: number_or_null(r.total_bets_bull.as_deref()),
            total_bets_bear: number_or_null(r.total_bets_bear.as_deref()),
            total_bnb: float_or_zero(r.total_bnb.as_deref()),
            total_bnb_bull: float_or_zero(r.total_bnb_bull.as_deref()),
            total_bnb_bear: float_or_zero(r.total_bnb_bear.as_deref()),
            total_bets_claimed: number_or_null(r.total_bets_claimed.as_deref()),
            total_bnb_claimed: float_or_zero(r.total_bnb_claimed.as_deref()),
            win_rate: float_or_zero(r.win_rate.as_deref()),
            average_bnb: float_or_zero(r.average_bnb.as_deref()),
            net_bnb: float_or_zero(r.net_bnb.as_deref()),
            id: r.id,
        }
    }
}

impl From<BetResponse> for Bet {
    fn from(r: BetResponse) -> Self {
        Self {
            block: number_or_null(r.block.as_deref()),
            amount: float_or_zero(r.amount.as_deref()),
            position: bet_position(r.position.as_deref()),
            claimed: r.claimed,
            claimed_at: number_or_null(r.claimed_at.as_deref()),
            claimed_block: number_or_null(r.claimed_block.as_deref()),
            claimed_bnb: float_or_zero(r.claimed_bnb.as_deref()),
            claimed_net_bnb: float_or_zero(r.claimed_net_bnb.as_deref()),
            created_at: number_or_null(r.created_at.as_deref()),
            updated_at: number_or_null(r.updated_at.as_deref()),
            claimed_hash: r.claimed_hash,
            user: r.user.map(User::from),
            round: r.round.map(Round::from),
            id: r.id,
            hash: r.hash,
        }
    }
}

impl From<RoundResponse> for Round {
    fn from(r: RoundResponse) -> Self {
        Self {
            epoch: number_or_null(r.epoch.as_deref()),
            failed: r.failed.unwrap_or(false),
            position: get_round_position(r.position.as_deref()),
            start_at: number_or_null(r.start_at.as_deref()),
            start_block: number_or_null(r.start_block.as_deref()),
            lock_at: number_or_null(r.lock_at.as_deref()),
            lock_block: number_or_null(r.lock_block.as_deref()),
            lock_price: float_or_zero(r.lock_price.as_deref()),
            close_at: number_or_null(r.close_at.as_deref()),
            close_block: number_or_null(r.close_block.as_deref()),
            close_price: float_or_zero(r.close_price.as_deref()),
            total_bets: number_or_null(r.total_bets.as_deref()),
            total_amount: float_or_zero(r.total_amount.as_deref()),
            bull_bets: number_or_null(r.bull_bets.as_deref()),
            bull_amount: float_or_zero(r.bull_amount.as_deref()),
            bear_bets: number_or_null(r.bear_bets.as_deref()),
            bear_amount: float_or_zero(r.bear_amount.as_deref()),
            bets: r
                .bets
                .unwrap_or_default()
                .into_iter()
                .map(Bet::from)
                .collect(),
            id: r.id,
            start_hash: r.start_hash,
            lock_hash: r.lock_hash,
            lock_round_id: r.lock_round_id,
            close_hash: r.close_hash,
            close_round_id: r.close_round_id,
        }
    }
}

#[must_use]
pub fn transform_user_response(response: UserResponse) -> User {
    response.into()
}

#[must_use]
pub fn transform_bet_response(response: BetResponse) -> Bet {
    response.into()
}

#[must_use]
pub fn transform_round_response(response: RoundResponse) -> Round {
    response.into()
}
