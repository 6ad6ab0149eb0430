//! Values derived from a user's bet history.

use super::bet::Bet;
use super::position::{HistoryFilter, RoundResult};

/// Classify a bet against the current epoch.
///
/// Returns `None` when the bet was fetched without its round. A failed round
/// is always [`RoundResult::Canceled`]. The current round and the one before
/// it are still settling, so both report [`RoundResult::Live`].
#[must_use]
pub fn get_round_result(bet: &Bet, current_epoch: u64) -> Option<RoundResult> {
    let round = bet.round.as_ref()?;

    if round.failed {
        return Some(RoundResult::Canceled);
    }

    // epoch >= current_epoch - 1, without underflow at epoch zero
    if round
        .epoch
        .is_some_and(|epoch| epoch.saturating_add(1) >= current_epoch)
    {
        return Some(RoundResult::Live);
    }

    if bet.position == round.resolved_position() {
        Some(RoundResult::Win)
    } else {
        Some(RoundResult::Lose)
    }
}

/// Keep the bets matching a claim-status filter, preserving order.
///
/// Uncollected bets are the ones still eligible for a payout: unclaimed, and
/// either on the round's winning side or in a failed round (refund).
#[must_use]
pub fn get_filtered_bets(mut bets: Vec<Bet>, filter: HistoryFilter) -> Vec<Bet> {
    match filter {
        HistoryFilter::Collected => bets.retain(|bet| bet.claimed),
        HistoryFilter::Uncollected => bets.retain(is_collectable),
        HistoryFilter::All => {}
    }
    bets
}

fn is_collectable(bet: &Bet) -> bool {
    if bet.claimed {
        return false;
    }
    bet.round
        .as_ref()
        .is_some_and(|round| round.position == Some(bet.position) || round.failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::BetPosition;
    use crate::domain::round::Round;

    fn round(epoch: u64, lock_price: f64, close_price: f64) -> Round {
        Round {
            id: epoch.to_string(),
            epoch: Some(epoch),
            lock_price,
            close_price,
            position: Some(BetPosition::resolved(lock_price, close_price)),
            ..Default::default()
        }
    }

    fn bet(id: &str, position: BetPosition, claimed: bool, round: Option<Round>) -> Bet {
        Bet {
            id: id.into(),
            hash: format!("0x{id}"),
            block: Some(1),
            amount: 0.1,
            position,
            claimed,
            claimed_at: None,
            claimed_block: None,
            claimed_hash: None,
            claimed_bnb: 0.0,
            claimed_net_bnb: 0.0,
            created_at: Some(1),
            updated_at: Some(1),
            user: None,
            round,
        }
    }

    // -------------------------------------------------------------------------
    // get_round_result
    // -------------------------------------------------------------------------

    #[test]
    fn failed_round_is_canceled_regardless_of_prices_or_epoch() {
        for epoch in [1, 99, 100] {
            let mut r = round(epoch, 100.0, 200.0);
            r.failed = true;
            let b = bet("a", BetPosition::Bull, false, Some(r));
            assert_eq!(get_round_result(&b, 100), Some(RoundResult::Canceled));
        }
    }

    #[test]
    fn previous_and_current_epochs_are_live() {
        let previous = bet("a", BetPosition::Bull, false, Some(round(99, 1.0, 2.0)));
        let current = bet("b", BetPosition::Bull, false, Some(round(100, 1.0, 2.0)));
        assert_eq!(get_round_result(&previous, 100), Some(RoundResult::Live));
        assert_eq!(get_round_result(&current, 100), Some(RoundResult::Live));
    }

    #[test]
    fn resolved_round_compares_bet_position() {
        let win = bet("a", BetPosition::Bull, false, Some(round(50, 1.0, 2.0)));
        let lose = bet("b", BetPosition::Bear, false, Some(round(50, 1.0, 2.0)));
        assert_eq!(get_round_result(&win, 100), Some(RoundResult::Win));
        assert_eq!(get_round_result(&lose, 100), Some(RoundResult::Lose));
    }

    #[test]
    fn price_tie_resolves_bear() {
        let bear = bet("a", BetPosition::Bear, false, Some(round(50, 3.0, 3.0)));
        let bull = bet("b", BetPosition::Bull, false, Some(round(50, 3.0, 3.0)));
        assert_eq!(get_round_result(&bear, 100), Some(RoundResult::Win));
        assert_eq!(get_round_result(&bull, 100), Some(RoundResult::Lose));
    }

    #[test]
    fn epoch_zero_does_not_underflow() {
        let b = bet("a", BetPosition::Bull, false, Some(round(0, 1.0, 2.0)));
        assert_eq!(get_round_result(&b, 0), Some(RoundResult::Live));
    }

    #[test]
    fn bet_without_round_has_no_result() {
        let b = bet("a", BetPosition::Bull, false, None);
        assert_eq!(get_round_result(&b, 100), None);
    }

    // -------------------------------------------------------------------------
    // get_filtered_bets
    // -------------------------------------------------------------------------

    fn sample_history() -> Vec<Bet> {
        let mut failed = round(10, 1.0, 1.0);
        failed.failed = true;
        vec![
            bet("claimed-win", BetPosition::Bull, true, Some(round(11, 1.0, 2.0))),
            bet("open-win", BetPosition::Bull, false, Some(round(12, 1.0, 2.0))),
            bet("open-lose", BetPosition::Bear, false, Some(round(13, 1.0, 2.0))),
            bet("refund", BetPosition::Bear, false, Some(failed)),
            bet("detached", BetPosition::Bull, false, None),
        ]
    }

    fn ids(bets: &[Bet]) -> Vec<&str> {
        bets.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn all_filter_is_identity() {
        let history = sample_history();
        assert_eq!(get_filtered_bets(history.clone(), HistoryFilter::All), history);
    }

    #[test]
    fn collected_filter_keeps_claimed_bets() {
        let collected = get_filtered_bets(sample_history(), HistoryFilter::Collected);
        assert!(collected.iter().all(|b| b.claimed));
        assert_eq!(ids(&collected), vec!["claimed-win"]);
    }

    #[test]
    fn uncollected_filter_keeps_winning_and_refundable_bets() {
        let uncollected = get_filtered_bets(sample_history(), HistoryFilter::Uncollected);
        assert_eq!(ids(&uncollected), vec!["open-win", "refund"]);
    }

    #[test]
    fn collected_and_uncollected_do_not_overlap() {
        let collected = get_filtered_bets(sample_history(), HistoryFilter::Collected);
        let uncollected = get_filtered_bets(sample_history(), HistoryFilter::Uncollected);
        assert!(collected
            .iter()
            .all(|c| uncollected.iter().all(|u| u.id != c.id)));
    }
}
