use holdem_odds::equity::{simulate_seeded, SimulationError};
use holdem_odds::hand::{Board, HoleCards};

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn probability_mass_is_conserved_on_every_street() {
    let me = hole("Js 10s");
    let boards = [
        Board::preflop(),
        board("9s 8d 2c"),
        board("9s 8d 2c Qh"),
        board("9s 8d 2c Qh 2d"),
    ];
    for (i, b) in boards.iter().enumerate() {
        let eq = simulate_seeded(&me, b, 2, 3_000, i as u64).unwrap();
        assert_eq!(eq.trials(), 3_000);
        let sum = eq.win() + eq.tie() + eq.lose();
        assert!((sum - 1.0).abs() < 1e-9, "win+tie+lose = {sum}");
        for frac in [eq.win(), eq.tie(), eq.lose()] {
            assert!((0.0..=1.0).contains(&frac));
        }
    }
}

#[test]
fn royal_flush_wins_every_trial() {
    // Hole + board make a royal flush; nothing ties it, nothing beats it.
    let me = hole("As Ks");
    let b = board("Qs Js 10s 2d 3c");
    for opponents in [1, 2, 5, 8] {
        let eq = simulate_seeded(&me, &b, opponents, 2_000, 1234).unwrap();
        assert_eq!(eq.win(), 1.0);
        assert_eq!(eq.tie(), 0.0);
        assert_eq!(eq.lose(), 0.0);
    }
}

#[test]
fn pocket_aces_dominate_a_random_hand() {
    // True heads-up preflop equity of AA is about 85%; with 20k trials the
    // estimate stays well inside these bounds.
    let eq = simulate_seeded(&hole("As Ah"), &Board::preflop(), 1, 20_000, 7).unwrap();
    assert!(eq.win() > 0.75, "AA win rate {}", eq.win());
    assert!(eq.win() < 0.95, "AA win rate {}", eq.win());
}

#[test]
fn trash_hand_is_an_underdog() {
    // 7-2 offsuit wins roughly a third of heads-up runouts.
    let eq = simulate_seeded(&hole("7c 2d"), &Board::preflop(), 1, 20_000, 7).unwrap();
    assert!(eq.win() < 0.5, "72o win rate {}", eq.win());
}

#[test]
fn more_opponents_mean_less_equity() {
    let me = hole("Ks Kh");
    let few = simulate_seeded(&me, &Board::preflop(), 1, 20_000, 3).unwrap();
    let many = simulate_seeded(&me, &Board::preflop(), 6, 20_000, 3).unwrap();
    assert!(many.win() < few.win());
}

#[test]
fn equity_scalar_is_win_plus_half_tie() {
    let eq = simulate_seeded(&hole("8c 8d"), &board("7s 6h 2c"), 2, 5_000, 21).unwrap();
    let expected = eq.win() + 0.5 * eq.tie();
    assert!((eq.equity() - expected).abs() < 1e-12);
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = simulate_seeded(&hole("Qd Jd"), &board("10d 9d 2s"), 3, 10_000, 99).unwrap();
    let b = simulate_seeded(&hole("Qd Jd"), &board("10d 9d 2s"), 3, 10_000, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn deck_exhaustion_is_reported_not_sampled() {
    let err = simulate_seeded(&hole("As Ah"), &Board::preflop(), 23, 1_000, 0).unwrap_err();
    match err {
        SimulationError::NotEnoughCards { needed, available } => {
            assert_eq!(needed, 51);
            assert_eq!(available, 50);
        }
        other => panic!("unexpected error: {other}"),
    }
}
