mod support;

use predictions_data::adapter::outbound::subgraph::{SubgraphClient, UserQueryOptions};
use predictions_data::domain::{
    get_filtered_bets, get_round_result, BetPosition, HistoryFilter, RoundResult,
};
use predictions_data::error::Error;
use predictions_data::port::outbound::history::{BetHistorySource, HistoryPage, WhereClause};
use serde_json::json;
use support::server::serve_once;
use support::subgraph;

// -------------------------------------------------------------------------
// Total Won Tests
// -------------------------------------------------------------------------

#[tokio::test]
async fn total_won_subtracts_treasury() {
    let (url, request) = serve_once(
        200,
        json!({"data": {"market": {"totalBNB": "100", "totalBNBTreasury": "40"}}}),
    )
    .await;

    let won = SubgraphClient::new(url).get_total_won().await.unwrap();

    assert_eq!(won, 60.0);
    let body = request.await.unwrap();
    assert_eq!(body["operationName"], "getTotalWonData");
    assert!(body["query"].as_str().unwrap().contains("totalBNBTreasury"));
}

#[tokio::test]
async fn total_won_is_zero_without_market() {
    let (url, _request) = serve_once(200, json!({"data": {"market": null}})).await;

    let won = SubgraphClient::new(url).total_won().await.unwrap();

    assert_eq!(won, 0.0);
}

// -------------------------------------------------------------------------
// Bet Tests
// -------------------------------------------------------------------------

#[tokio::test]
async fn bet_lookup_lowercases_id_and_normalizes() {
    let bet = subgraph::bet(
        "0xabc",
        "Bull",
        false,
        subgraph::round(100, "Bull", "350.1", "351.4"),
        subgraph::user("0xuser"),
    );
    let (url, request) = serve_once(200, json!({"data": {"bet": bet}})).await;

    let bet = SubgraphClient::new(url)
        .bet("0xABC")
        .await
        .unwrap()
        .expect("bet");

    assert_eq!(bet.position, BetPosition::Bull);
    assert_eq!(bet.amount, 0.5);
    assert_eq!(bet.block, Some(7_500_050));
    assert_eq!(bet.claimed_at, None);
    let round = bet.round.as_ref().expect("round");
    assert_eq!(round.epoch, Some(100));
    assert_eq!(round.position, Some(BetPosition::Bull));
    assert_eq!(round.lock_price, 350.1);
    assert_eq!(bet.user.as_ref().map(|u| u.net_bnb), Some(-1.25));

    assert_eq!(get_round_result(&bet, 200), Some(RoundResult::Win));
    assert_eq!(get_round_result(&bet, 101), Some(RoundResult::Live));

    let body = request.await.unwrap();
    assert_eq!(body["variables"]["id"], "0xabc");
}

#[tokio::test]
async fn unknown_bet_is_none() {
    let (url, _request) = serve_once(200, json!({"data": {"bet": null}})).await;

    let bet = SubgraphClient::new(url).get_bet("0xmissing").await.unwrap();

    assert!(bet.is_none());
}

#[tokio::test]
async fn bet_history_passes_filter_and_page() {
    let bets = json!([
        subgraph::bet(
            "0x1",
            "Bull",
            false,
            subgraph::round(10, "Bull", "1", "2"),
            subgraph::user("0xuser")
        ),
        subgraph::bet(
            "0x2",
            "Bear",
            false,
            subgraph::round(11, "Bull", "1", "2"),
            subgraph::user("0xuser")
        ),
        subgraph::bet(
            "0x3",
            "Bear",
            true,
            subgraph::round(12, "Bear", "2", "1"),
            subgraph::user("0xuser")
        ),
    ]);
    let (url, request) = serve_once(200, json!({"data": {"bets": bets}})).await;

    let mut filter = WhereClause::new();
    filter.insert("user".into(), json!("0xuser"));
    let page = HistoryPage {
        first: 50,
        skip: 100,
    };

    let bets = SubgraphClient::new(url).bets(&filter, page).await.unwrap();

    assert_eq!(bets.len(), 3);
    let uncollected = get_filtered_bets(bets.clone(), HistoryFilter::Uncollected);
    assert_eq!(uncollected.len(), 1);
    assert_eq!(uncollected[0].id, "0x1");
    let collected = get_filtered_bets(bets, HistoryFilter::Collected);
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].id, "0x3");

    let body = request.await.unwrap();
    assert_eq!(body["operationName"], "getBetHistory");
    assert_eq!(body["variables"]["first"], 50);
    assert_eq!(body["variables"]["skip"], 100);
    assert_eq!(body["variables"]["where"]["user"], "0xuser");
}

// -------------------------------------------------------------------------
// User Tests
// -------------------------------------------------------------------------

#[tokio::test]
async fn users_query_sends_ordering() {
    let (url, request) = serve_once(
        200,
        json!({"data": {"users": [subgraph::user("0x1"), subgraph::user("0x2")]}}),
    )
    .await;

    let options = UserQueryOptions {
        order_by: "netBNB".into(),
        ..Default::default()
    };
    let users = SubgraphClient::new(url)
        .get_prediction_users(&options)
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    let body = request.await.unwrap();
    assert_eq!(body["variables"]["first"], 5);
    assert_eq!(body["variables"]["skip"], 0);
    assert_eq!(body["variables"]["orderBy"], "netBNB");
    assert_eq!(body["variables"]["orderDir"], "desc");
}

#[tokio::test]
async fn user_lookup_normalizes_counts() {
    let (url, request) =
        serve_once(200, json!({"data": {"user": subgraph::user("0xuser")}})).await;

    let user = SubgraphClient::new(url)
        .user("0xUSER")
        .await
        .unwrap()
        .expect("user");

    assert_eq!(user.total_bets, Some(12));
    assert_eq!(user.total_bnb, 3.5);
    assert_eq!(user.win_rate, 58.33);
    assert_eq!(request.await.unwrap()["variables"]["id"], "0xuser");
}

// -------------------------------------------------------------------------
// Failure Tests
// -------------------------------------------------------------------------

#[tokio::test]
async fn graphql_errors_are_returned() {
    let (url, _request) = serve_once(
        200,
        json!({"data": null, "errors": [{"message": "indexing_error"}]}),
    )
    .await;

    let result = SubgraphClient::new(url).get_total_won().await;

    match result {
        Err(Error::GraphQl { messages }) => assert_eq!(messages, vec!["indexing_error"]),
        other => panic!("Expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_http_error() {
    let (url, _request) = serve_once(500, json!({"message": "boom"})).await;

    let result = SubgraphClient::new(url).get_total_won().await;

    assert!(
        matches!(result, Err(Error::Http(ref err)) if err.status().map(|s| s.as_u16()) == Some(500)),
        "Expected HTTP 500, got {result:?}"
    );
}
