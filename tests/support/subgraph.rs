//! Subgraph response builders.

use serde_json::{json, Value};

pub fn user(id: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "1620000000",
        "updatedAt": "1620003600",
        "block": "7500000",
        "totalBets": "12",
        "totalBetsBull": "7",
        "totalBetsBear": "5",
        "totalBNB": "3.5",
        "totalBNBBull": "2",
        "totalBNBBear": "1.5",
        "totalBetsClaimed": "4",
        "totalBNBClaimed": "2.25",
        "winRate": "58.33",
        "averageBNB": "0.2916",
        "netBNB": "-1.25"
    })
}

/// Round `epoch` that locked at `lock` and closed at `close`.
pub fn round(epoch: u64, position: &str, lock: &str, close: &str) -> Value {
    json!({
        "id": epoch.to_string(),
        "epoch": epoch.to_string(),
        "position": position,
        "failed": false,
        "startAt": "1620000000",
        "startBlock": "7500000",
        "startHash": "0xstart",
        "lockAt": "1620000300",
        "lockBlock": "7500100",
        "lockHash": "0xlock",
        "lockPrice": lock,
        "lockRoundId": "18446744073709555000",
        "closeAt": "1620000600",
        "closeBlock": "7500200",
        "closeHash": "0xclose",
        "closePrice": close,
        "closeRoundId": "18446744073709555001",
        "totalBets": "40",
        "totalAmount": "12.5",
        "bullBets": "25",
        "bullAmount": "8",
        "bearBets": "15",
        "bearAmount": "4.5"
    })
}

pub fn bet(id: &str, position: &str, claimed: bool, round: Value, user: Value) -> Value {
    let claim = |value: &str| if claimed { json!(value) } else { Value::Null };
    json!({
        "id": id,
        "hash": "0xbethash",
        "amount": "0.5",
        "position": position,
        "claimed": claimed,
        "claimedAt": claim("1620000900"),
        "claimedBlock": claim("7500300"),
        "claimedHash": claim("0xclaim"),
        "claimedBNB": claim("0.95"),
        "claimedNetBNB": claim("0.45"),
        "createdAt": "1620000100",
        "updatedAt": "1620000900",
        "block": "7500050",
        "round": round,
        "user": user
    })
}
