//! holdem-odds: Texas Hold'em odds engine
//!
//! Goals:
//! - Deterministic, fast best-5-of-7 hand evaluation
//! - Monte Carlo win/tie/loss estimation against unknown opponents
//! - Exact nuts and threat-hand enumeration from partial boards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: who beats pocket aces?
//! ```
//! use holdem_odds::analysis::threats;
//! use holdem_odds::equity::simulate_seeded;
//! use holdem_odds::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kd 7c 2h".parse().unwrap();
//!
//! let odds = simulate_seeded(&hole, &board, 2, 10_000, 42).unwrap();
//! assert!(odds.win() > 0.5);
//!
//! let beats_me = threats(&hole, &board, 9).unwrap();
//! assert!(!beats_me.is_empty()); // sets and two-pair combos are out there
//! ```
//!
//! The engine is pure computation: callers hold the cards and the opponent
//! count, the engine reports numbers and card sets. Every call works from
//! its own copy of the unseen-card pool, so calls are freely concurrent.

pub mod analysis;
pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
