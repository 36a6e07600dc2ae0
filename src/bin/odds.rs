//! Command-line front end: odds, nuts and threats for a hand in progress.
//!
//! ```sh
//! holdem-odds simulate "As Ah" "Kd 7c 2h" 2 10000
//! holdem-odds nuts "As Ah" "Kd 7c 2h"
//! holdem-odds threats "As Ah" "Kd 7c 2h"
//! ```

use holdem_odds::analysis::{best_possible, threats};
use holdem_odds::equity::simulate;
use holdem_odds::hand::{Board, HoleCards};

const USAGE: &str = "usage:
  holdem-odds simulate <hole> <board> [opponents] [trials]
  holdem-odds nuts <hole> <board>
  holdem-odds threats <hole> <board> [limit]
cards are written like \"As Kd 10c\"; the board may be \"\" preflop";

// Defaults match what the interactive table view shows.
const DEFAULT_OPPONENTS: usize = 2;
const DEFAULT_TRIALS: u64 = 7_000;
const DEFAULT_THREAT_LIMIT: usize = 9;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("simulate") => cmd_simulate(&args[1..]),
        Some("nuts") => cmd_nuts(&args[1..]),
        Some("threats") => cmd_threats(&args[1..]),
        _ => Err(USAGE.to_string()),
    };
    if let Err(msg) = result {
        eprintln!("{msg}");
        std::process::exit(2);
    }
}

fn parse_board(s: &str) -> Result<Board, String> {
    if s.trim().is_empty() {
        return Ok(Board::preflop());
    }
    s.parse().map_err(|e| format!("bad board: {e}"))
}

fn cmd_simulate(args: &[String]) -> Result<(), String> {
    let (hole_raw, board_raw) = match args {
        [h, b, ..] => (h, b),
        _ => return Err(USAGE.to_string()),
    };
    let hole: HoleCards = hole_raw.parse().map_err(|e| format!("bad hole cards: {e}"))?;
    let board = parse_board(board_raw)?;
    let opponents = match args.get(2) {
        Some(n) => n.parse().map_err(|e| format!("bad opponent count: {e}"))?,
        None => DEFAULT_OPPONENTS,
    };
    let trials = match args.get(3) {
        Some(n) => n.parse().map_err(|e| format!("bad trial count: {e}"))?,
        None => DEFAULT_TRIALS,
    };

    let odds = simulate(&hole, &board, opponents, trials).map_err(|e| e.to_string())?;
    println!("win  {:5.1}%", odds.win() * 100.0);
    println!("tie  {:5.1}%", odds.tie() * 100.0);
    println!("lose {:5.1}%", odds.lose() * 100.0);
    Ok(())
}

fn cmd_nuts(args: &[String]) -> Result<(), String> {
    let (hole_raw, board_raw) = match args {
        [h, b, ..] => (h, b),
        _ => return Err(USAGE.to_string()),
    };
    let hole: HoleCards = hole_raw.parse().map_err(|e| format!("bad hole cards: {e}"))?;
    let board = parse_board(board_raw)?;
    let nuts = best_possible(&hole, &board).map_err(|e| e.to_string())?;
    println!("best possible: {:?}", nuts.category);
    for h in &nuts.holes {
        println!("  {h}");
    }
    Ok(())
}

fn cmd_threats(args: &[String]) -> Result<(), String> {
    let (hole_raw, board_raw) = match args {
        [h, b, ..] => (h, b),
        _ => return Err(USAGE.to_string()),
    };
    let hole: HoleCards = hole_raw.parse().map_err(|e| format!("bad hole cards: {e}"))?;
    let board = parse_board(board_raw)?;
    let limit = match args.get(2) {
        Some(n) => n.parse().map_err(|e| format!("bad limit: {e}"))?,
        None => DEFAULT_THREAT_LIMIT,
    };

    let list = threats(&hole, &board, limit).map_err(|e| e.to_string())?;
    if list.is_empty() {
        println!("no hand beats you");
        return Ok(());
    }
    for t in &list {
        println!("{}  ({:?})", t.hole, t.category);
    }
    Ok(())
}
