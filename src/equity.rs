use crate::deck::Deck;
use crate::evaluator::evaluate_seven;
use crate::hand::{validate_state, Board, HandError, HoleCards};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Trials per parallel work unit. Small enough to spread across the pool,
/// large enough that the per-batch pool copy is noise.
const BATCH_SIZE: u64 = 1024;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("at least one opponent is required")]
    NoOpponents,
    #[error("at least one trial is required")]
    NoTrials,
    #[error("deck exhausted: need {needed} unseen cards, only {available} remain")]
    NotEnoughCards { needed: usize, available: usize },
}

/// Win/tie/loss tallies from a Monte Carlo run.
///
/// Kept as integer counts so partial results merge exactly; the fractions
/// are derived on demand and sum to 1 (within float rounding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Equity {
    wins: u64,
    ties: u64,
    losses: u64,
}

impl Equity {
    fn merge(self, other: Equity) -> Equity {
        Equity {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    pub const fn wins(&self) -> u64 {
        self.wins
    }
    pub const fn ties(&self) -> u64 {
        self.ties
    }
    pub const fn losses(&self) -> u64 {
        self.losses
    }

    pub const fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Fraction of trials the player won outright.
    pub fn win(&self) -> f64 {
        self.wins as f64 / self.trials() as f64
    }

    /// Fraction of trials the player split with the best opponent.
    pub fn tie(&self) -> f64 {
        self.ties as f64 / self.trials() as f64
    }

    /// Fraction of trials some opponent won outright.
    pub fn lose(&self) -> f64 {
        self.losses as f64 / self.trials() as f64
    }

    /// Single-number equity: win + tie/2.
    pub fn equity(&self) -> f64 {
        (self.wins as f64 + 0.5 * self.ties as f64) / self.trials() as f64
    }
}

/// Estimate win/tie/loss odds against `opponents` unknown random hands.
///
/// Each trial independently deals every opponent two cards from the unseen
/// pool, completes the board to five, and scores everyone; the player wins
/// a trial only by strictly beating every opponent, and ties by matching
/// the best opponent. Seeded from OS entropy; use [`simulate_seeded`] for
/// reproducible runs.
///
/// ```no_run
/// use holdem_odds::equity::simulate;
/// use holdem_odds::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let odds = simulate(&hole, &Board::preflop(), 2, 10_000).unwrap();
/// assert!(odds.win() > 0.5);
/// ```
pub fn simulate(
    hole: &HoleCards,
    board: &Board,
    opponents: usize,
    trials: u64,
) -> Result<Equity, SimulationError> {
    simulate_seeded(hole, board, opponents, trials, rand::rng().random())
}

/// [`simulate`] with a fixed master seed: the same inputs and seed always
/// produce the same tallies, regardless of how the trials are batched
/// across threads.
pub fn simulate_seeded(
    hole: &HoleCards,
    board: &Board,
    opponents: usize,
    trials: u64,
    seed: u64,
) -> Result<Equity, SimulationError> {
    validate_state(hole, board)?;
    if opponents == 0 {
        return Err(SimulationError::NoOpponents);
    }
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }

    let seen = hole.as_array().into_iter().chain(board.as_slice().iter().copied());
    let pool = Deck::unseen(seen).into_cards();
    let to_come = 5 - board.len();
    let needed = 2 * opponents + to_come;
    if needed > pool.len() {
        return Err(SimulationError::NotEnoughCards { needed, available: pool.len() });
    }

    let hole = hole.as_array();
    let known_board = board.as_slice();
    let batches = (trials + BATCH_SIZE - 1) / BATCH_SIZE;

    let tally = (0..batches)
        .into_par_iter()
        .map(|batch| {
            // Per-batch stream: master seed plus a golden-ratio stride.
            let mut rng =
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(batch.wrapping_mul(0x9E37_79B9_7F4A_7C15)));
            let count = if batch == batches - 1 { trials - batch * BATCH_SIZE } else { BATCH_SIZE };
            let mut pool = pool.clone();
            let mut acc = Equity::default();
            for _ in 0..count {
                let (drawn, _) = pool.partial_shuffle(&mut rng, needed);

                let mut full_board = [drawn[0]; 5];
                full_board[..known_board.len()].copy_from_slice(known_board);
                full_board[known_board.len()..].copy_from_slice(&drawn[..to_come]);

                let player = evaluate_seven(&[
                    hole[0],
                    hole[1],
                    full_board[0],
                    full_board[1],
                    full_board[2],
                    full_board[3],
                    full_board[4],
                ])
                .value();

                let mut best_opponent = None;
                for i in 0..opponents {
                    let value = evaluate_seven(&[
                        drawn[to_come + 2 * i],
                        drawn[to_come + 2 * i + 1],
                        full_board[0],
                        full_board[1],
                        full_board[2],
                        full_board[3],
                        full_board[4],
                    ])
                    .value();
                    if best_opponent.map_or(true, |b| value > b) {
                        best_opponent = Some(value);
                    }
                }
                let best_opponent = match best_opponent {
                    Some(v) => v,
                    None => continue,
                };

                if player > best_opponent {
                    acc.wins += 1;
                } else if player == best_opponent {
                    acc.ties += 1;
                } else {
                    acc.losses += 1;
                }
            }
            acc
        })
        .reduce(Equity::default, Equity::merge);

    Ok(tally)
}
