//! Prediction subgraph (indexing service) integration.

pub mod client;
pub mod dto;
pub mod query;
pub mod settings;

pub use client::{OrderDirection, SubgraphClient, UserQueryOptions, USERS_PAGE_SIZE};
pub use dto::{
    get_round_position, transform_bet_response, transform_round_response,
    transform_user_response, BetResponse, MarketTotals, RoundResponse, UserResponse,
};
pub use settings::{SubgraphConfig, SubgraphHttpConfig};
