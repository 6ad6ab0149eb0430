//! Prediction subgraph GraphQL client.
//!
//! Every method issues exactly one POST to the configured endpoint and hands
//! back the raw response shapes from [`super::dto`]. The [`BetHistorySource`]
//! impl layers the domain conversions on top.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::dto::{
    BetData, BetHistoryData, BetResponse, TotalWonData, UserData, UserResponse, UsersData,
};
use super::query;
use super::settings::SubgraphConfig;
use crate::domain::{Bet, User};
use crate::error::{Error, Result};
use crate::port::outbound::history::{BetHistorySource, HistoryPage, WhereClause};

/// Default leaderboard page size.
pub const USERS_PAGE_SIZE: u32 = 5;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Sort direction for leaderboard queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

/// Leaderboard query options.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQueryOptions {
    pub filter: WhereClause,
    pub first: u32,
    pub skip: u32,
    /// `User` field to sort by, e.g. `netBNB` or `totalBets`.
    pub order_by: String,
    pub order_direction: OrderDirection,
}

impl Default for UserQueryOptions {
    fn default() -> Self {
        Self {
            filter: WhereClause::new(),
            first: USERS_PAGE_SIZE,
            skip: 0,
            order_by: "createdAt".into(),
            order_direction: OrderDirection::Desc,
        }
    }
}

/// HTTP client for the prediction subgraph.
pub struct SubgraphClient {
    http: HttpClient,
    url: String,
}

impl SubgraphClient {
    /// Create a client for the given GraphQL endpoint with default HTTP settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SubgraphConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.url.clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request<T>(&self, operation: &'static str, query: &str, variables: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = json!({
            "operationName": operation,
            "query": query,
            "variables": variables,
        });

        let response: GraphQlResponse<T> = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            warn!(operation, errors = ?messages, "Subgraph returned errors");
            return Err(Error::GraphQl { messages });
        }

        response.data.ok_or_else(|| Error::GraphQl {
            messages: vec![format!("{operation} returned no data")],
        })
    }

    /// Total won by bettors across all rounds (volume minus treasury, floored at 0).
    pub async fn get_total_won(&self) -> Result<f64> {
        info!(url = %self.url, "Fetching total won");

        let data: TotalWonData = self
            .request("getTotalWonData", query::TOTAL_WON, json!({}))
            .await?;

        Ok(data.market.map_or(0.0, |market| market.total_won()))
    }

    /// Bets matching `filter`, newest first, each with its round and user.
    pub async fn get_bet_history(
        &self,
        filter: &WhereClause,
        page: HistoryPage,
    ) -> Result<Vec<BetResponse>> {
        info!(
            first = page.first,
            skip = page.skip,
            "Fetching bet history"
        );

        let data: BetHistoryData = self
            .request(
                "getBetHistory",
                &query::bet_history(),
                json!({
                    "first": page.first,
                    "skip": page.skip,
                    "where": filter,
                }),
            )
            .await?;

        debug!(count = data.bets.len(), "Fetched bets");
        Ok(data.bets)
    }

    /// Look up one bet by id (matched lower-cased).
    pub async fn get_bet(&self, bet_id: &str) -> Result<Option<BetResponse>> {
        let id = bet_id.to_lowercase();
        info!(bet_id = %id, "Fetching bet");

        let data: BetData = self
            .request("getBet", &query::bet(), json!({ "id": id }))
            .await?;

        Ok(data.bet)
    }

    /// Leaderboard page of users.
    pub async fn get_prediction_users(
        &self,
        options: &UserQueryOptions,
    ) -> Result<Vec<UserResponse>> {
        info!(
            first = options.first,
            skip = options.skip,
            order_by = %options.order_by,
            "Fetching prediction users"
        );

        let data: UsersData = self
            .request(
                "getUsers",
                &query::users(),
                json!({
                    "first": options.first,
                    "skip": options.skip,
                    "where": options.filter,
                    "orderBy": options.order_by,
                    "orderDir": options.order_direction,
                }),
            )
            .await?;

        debug!(count = data.users.len(), "Fetched users");
        Ok(data.users)
    }

    /// Look up one user by address (matched lower-cased).
    pub async fn get_prediction_user(&self, account: &str) -> Result<Option<UserResponse>> {
        let id = account.to_lowercase();
        info!(account = %id, "Fetching prediction user");

        let data: UserData = self
            .request("getUser", &query::user(), json!({ "id": id }))
            .await?;

        Ok(data.user)
    }
}

#[async_trait]
impl BetHistorySource for SubgraphClient {
    async fn total_won(&self) -> Result<f64> {
        self.get_total_won().await
    }

    async fn bets(&self, filter: &WhereClause, page: HistoryPage) -> Result<Vec<Bet>> {
        let bets = self.get_bet_history(filter, page).await?;
        Ok(bets.into_iter().map(Bet::from).collect())
    }

    async fn bet(&self, bet_id: &str) -> Result<Option<Bet>> {
        Ok(self.get_bet(bet_id).await?.map(Bet::from))
    }

    async fn user(&self, account: &str) -> Result<Option<User>> {
        Ok(self.get_prediction_user(account).await?.map(User::from))
    }
}
