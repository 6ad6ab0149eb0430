//! GraphQL documents sent to the prediction subgraph.

/// Fields selected for a user.
pub const USER_BASE_FIELDS: &str = "
  id
  createdAt
  updatedAt
  block
  totalBets
  totalBetsBull
  totalBetsBear
  totalBNB
  totalBNBBull
  totalBNBBear
  totalBetsClaimed
  totalBNBClaimed
  winRate
  averageBNB
  netBNB
";

/// Fields selected for a bet (without nested entities).
pub const BET_BASE_FIELDS: &str = "
  id
  hash
  amount
  position
  claimed
  claimedAt
  claimedBlock
  claimedHash
  claimedBNB
  claimedNetBNB
  createdAt
  updatedAt
  block
";

/// Fields selected for a round (without nested bets).
pub const ROUND_BASE_FIELDS: &str = "
  id
  epoch
  position
  failed
  startAt
  startBlock
  startHash
  lockAt
  lockBlock
  lockHash
  lockPrice
  lockRoundId
  closeAt
  closeBlock
  closeHash
  closePrice
  closeRoundId
  totalBets
  totalAmount
  bullBets
  bullAmount
  bearBets
  bearAmount
";

pub const TOTAL_WON: &str = "
  query getTotalWonData {
    market(id: 1) {
      totalBNB
      totalBNBTreasury
    }
  }
";

fn bet_with_relations() -> String {
    format!("{BET_BASE_FIELDS} round {{ {ROUND_BASE_FIELDS} }} user {{ {USER_BASE_FIELDS} }}")
}

#[must_use]
pub fn bet_history() -> String {
    format!(
        "query getBetHistory($first: Int!, $skip: Int!, $where: Bet_filter) {{
          bets(first: $first, skip: $skip, where: $where, orderBy: createdAt, orderDirection: desc) {{
            {}
          }}
        }}",
        bet_with_relations()
    )
}

#[must_use]
pub fn bet() -> String {
    format!(
        "query getBet($id: ID!) {{
          bet(id: $id) {{
            {}
          }}
        }}",
        bet_with_relations()
    )
}

#[must_use]
pub fn users() -> String {
    format!(
        "query getUsers($first: Int!, $skip: Int!, $where: User_filter, $orderBy: User_orderBy, $orderDir: OrderDirection) {{
          users(first: $first, skip: $skip, where: $where, orderBy: $orderBy, orderDirection: $orderDir) {{
            {USER_BASE_FIELDS}
          }}
        }}"
    )
}

#[must_use]
pub fn user() -> String {
    format!(
        "query getUser($id: ID!) {{
          user(id: $id) {{
            {USER_BASE_FIELDS}
          }}
        }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_history_orders_newest_first_with_relations() {
        let query = bet_history();
        assert!(query.contains("orderBy: createdAt, orderDirection: desc"));
        assert!(query.contains("round {"));
        assert!(query.contains("user {"));
        assert!(query.contains("closeRoundId"));
    }

    #[test]
    fn documents_are_balanced() {
        for query in [TOTAL_WON.to_string(), bet_history(), bet(), users(), user()] {
            let open = query.matches('{').count();
            let close = query.matches('}').count();
            assert_eq!(open, close, "unbalanced braces in {query}");
        }
    }
}
