use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate_best, Category, EvalError, HandValue};
use crate::hand::{validate_state, Board, HandError, HoleCards, Street};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("board analysis needs at least a flop")]
    BoardTooSmall,
}

/// The best hand any opponent could currently hold, with every hole-card
/// pair that reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BestPossible {
    pub value: HandValue,
    pub category: Category,
    /// All pairs tied for the best value, never truncated.
    pub holes: Vec<HoleCards>,
}

/// One opponent hand that beats the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Threat {
    pub hole: HoleCards,
    pub value: HandValue,
    pub category: Category,
}

fn require_flop(board: &Board) -> Result<(), AnalysisError> {
    if board.street() == Street::Preflop {
        return Err(AnalysisError::BoardTooSmall);
    }
    Ok(())
}

/// Find the nuts: enumerate every unordered pair of unseen cards (the
/// deck minus the board and the player's own hole cards, 45 cards and
/// C(45,2) = 990 pairs on the river) and keep all pairs tied for the
/// strongest score. Exact: no sampling, and ties are never truncated.
///
/// The player holds the nuts when their own score is at least the
/// returned value; their hidden cards are not in the enumerated pool, so
/// their score may even exceed it.
///
/// ```
/// use holdem_odds::analysis::best_possible;
/// use holdem_odds::evaluator::Category;
/// use holdem_odds::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "2c 7h".parse().unwrap();
/// let board: Board = "Qs Js 10s 2d 3c".parse().unwrap();
/// let nuts = best_possible(&hole, &board).unwrap();
/// assert_eq!(nuts.category, Category::StraightFlush);
/// assert_eq!(nuts.holes.len(), 1); // only As Ks makes the royal
/// ```
pub fn best_possible(hole: &HoleCards, board: &Board) -> Result<BestPossible, AnalysisError> {
    validate_state(hole, board)?;
    require_flop(board)?;
    let seen = hole.as_array().into_iter().chain(board.as_slice().iter().copied());
    let pool = Deck::unseen(seen).into_cards();

    let mut best: Option<BestPossible> = None;
    for_each_pair(&pool, board, |hole, value, category| {
        match best.as_mut() {
            Some(b) if value < b.value => {}
            Some(b) if value == b.value => b.holes.push(hole),
            _ => best = Some(BestPossible { value, category, holes: vec![hole] }),
        }
        Ok(())
    })?;
    // A legal state leaves at least 45 unseen cards, so some pair exists.
    best.ok_or(AnalysisError::BoardTooSmall)
}

/// Rank the hands that beat the player: enumerate every pair from the
/// same unseen pool as [`best_possible`], keep those scoring strictly
/// above the player, strongest first, truncated to `limit`.
///
/// `limit` is explicit: callers that show "top N threats" own N. An
/// empty list means no hand beats the player (the nuts).
///
/// ```
/// use holdem_odds::analysis::threats;
/// use holdem_odds::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "Qs Js 10s 2d 3c".parse().unwrap();
/// assert!(threats(&hole, &board, 9).unwrap().is_empty());
/// ```
pub fn threats(
    hole: &HoleCards,
    board: &Board,
    limit: usize,
) -> Result<Vec<Threat>, AnalysisError> {
    validate_state(hole, board)?;
    require_flop(board)?;

    let mut cards = Vec::with_capacity(board.len() + 2);
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    let player = evaluate_best(&cards)?.value();

    let seen = hole.as_array().into_iter().chain(board.as_slice().iter().copied());
    let pool = Deck::unseen(seen).into_cards();

    let mut beating = Vec::new();
    for_each_pair(&pool, board, |hole, value, category| {
        if value > player {
            beating.push(Threat { hole, value, category });
        }
        Ok(())
    })?;

    // Strongest first; equal-value threats ordered by cards for stable output.
    beating.sort_by(|x, y| {
        y.value
            .cmp(&x.value)
            .then_with(|| y.hole.first().cmp(&x.hole.first()))
            .then_with(|| y.hole.second().cmp(&x.hole.second()))
    });
    beating.truncate(limit);
    Ok(beating)
}

/// Score every unordered pair from `pool` against `board`, reusing one
/// scratch buffer across all C(n,2) evaluations.
fn for_each_pair<F>(pool: &[Card], board: &Board, mut f: F) -> Result<(), AnalysisError>
where
    F: FnMut(HoleCards, HandValue, Category) -> Result<(), AnalysisError>,
{
    let slot = board.len();
    let mut cards = Vec::with_capacity(slot + 2);
    cards.extend_from_slice(board.as_slice());
    cards.push(pool[0]);
    cards.push(pool[0]);
    for i in 0..pool.len() {
        cards[slot] = pool[i];
        for j in i + 1..pool.len() {
            cards[slot + 1] = pool[j];
            let eval = evaluate_best(&cards)?;
            let hole = HoleCards::normalized(pool[i], pool[j])?;
            f(hole, eval.value(), eval.category)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_holdem;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn hole(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    #[test]
    fn preflop_board_is_rejected() {
        assert!(matches!(
            best_possible(&hole("As Ks"), &Board::preflop()),
            Err(AnalysisError::BoardTooSmall)
        ));
        assert!(matches!(
            threats(&hole("As Ks"), &Board::preflop(), 9),
            Err(AnalysisError::BoardTooSmall)
        ));
    }

    #[test]
    fn royal_board_nuts_is_unique() {
        let nuts = best_possible(&hole("2c 7h"), &board("Qs Js 10s 2d 3c")).unwrap();
        assert_eq!(nuts.category, Category::StraightFlush);
        assert_eq!(nuts.holes, vec![hole("As Ks")]);
    }

    #[test]
    fn nuts_holder_faces_no_threats() {
        let b = board("Qs Js 10s 2d 3c");
        let me = hole("As Ks");
        let ts = threats(&me, &b, 100).unwrap();
        assert!(ts.is_empty());
        // Holding the royal, the player scores above anything the pool offers.
        let player = evaluate_holdem(&me, &b).unwrap().value();
        let nuts = best_possible(&me, &b).unwrap();
        assert!(player > nuts.value);
    }

    #[test]
    fn threats_are_strictly_better_and_sorted() {
        let b = board("Qs Js 10s 2d 3c");
        let me = hole("Ad Ac"); // pair of aces on a scary board
        let player = evaluate_holdem(&me, &b).unwrap().value();
        let ts = threats(&me, &b, 50).unwrap();
        assert_eq!(ts.len(), 50);
        for t in &ts {
            assert!(t.value > player);
        }
        for w in ts.windows(2) {
            assert!(w[0].value >= w[1].value);
        }
        // Strongest threat on this board is the royal flush.
        assert_eq!(ts[0].hole, hole("As Ks"));
        assert_eq!(ts[0].category, Category::StraightFlush);
        // Non-empty threats mean the player sits below the best possible.
        let nuts = best_possible(&me, &b).unwrap();
        assert!(player < nuts.value);
    }

    #[test]
    fn limit_truncates_but_zero_limit_is_empty() {
        let b = board("Qs Js 10s 2d 3c");
        let me = hole("2c 7h");
        let all = threats(&me, &b, usize::MAX).unwrap();
        let top3 = threats(&me, &b, 3).unwrap();
        assert_eq!(top3.as_slice(), &all[..3]);
        assert!(threats(&me, &b, 0).unwrap().is_empty());
    }
}
