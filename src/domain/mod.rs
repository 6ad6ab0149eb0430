//! Client-side prediction market model.
//!
//! Two families of types live here:
//! - indexer entities ([`User`], [`Bet`], [`Round`]) with display-precision
//!   floats, plus the history helpers computed from them;
//! - on-chain snapshots ([`LedgerEntry`], [`RoundSnapshot`],
//!   [`MarketSnapshot`]) that keep integers in the wire-safe
//!   [`SerializedBigNumber`] form.

mod bet;
mod big_number;
mod history;
mod ledger;
mod position;
mod round;
mod snapshot;
mod user;

pub mod numeric;

// Indexer entities
pub use bet::Bet;
pub use round::Round;
pub use user::User;

pub use position::{BetPosition, HistoryFilter, PredictionStatus, RoundResult};

// History helpers
pub use history::{get_filtered_bets, get_round_result};

// On-chain snapshots and builders
pub use big_number::{parse_big_number_obj, ParsedField, SerializedBigNumber};
pub use ledger::{
    make_ledger_data, serialize_predictions_ledger_response, LedgerData, LedgerEntry,
    LedgerResponse, UserRounds,
};
pub use snapshot::{
    make_future_round_response, make_round_data, serialize_predictions_rounds_response,
    MarketSnapshot, RoundData, RoundSnapshot, RoundsResponse,
};
