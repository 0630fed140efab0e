//! Tests for the game engine's rules and score bookkeeping.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tictactoe_core::{
    Board, GameEngine, Line, MemoryStore, Phase, Player, Position, RoundOutcome, ScoreRecord,
    ScoreStore, Square,
};

fn engine(seed: u64) -> GameEngine<MemoryStore> {
    GameEngine::with_rng(MemoryStore::new(), StdRng::seed_from_u64(seed))
}

fn completed_lines(board: &Board) -> usize {
    Line::ALL
        .iter()
        .filter(|line| tictactoe_core::rules::check_line(board, **line).is_some())
        .count()
}

#[test]
fn test_top_row_win_for_player() {
    let mut engine = engine(1);
    // O answers in the middle row without completing it.
    assert_eq!(engine.place_mark(0, 0).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.place_mark(1, 0).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.place_mark(0, 1).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.place_mark(1, 1).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.place_mark(0, 2).unwrap(), RoundOutcome::Win(Player::X));

    assert_eq!(*engine.score(), ScoreRecord::new(1, 0));
    assert_eq!(engine.phase(), Phase::Ended);
    assert_eq!(engine.store().load(), ScoreRecord::new(1, 0));
    assert_eq!(
        engine.store().current().map(|f| f.result().as_str()),
        Some("Player X wins")
    );
}

/// Alternating play ending in X O X / X O O / O X X with no line.
const TIE_MOVES: [(usize, usize); 9] = [
    (0, 0), // X
    (1, 1), // O
    (0, 2), // X
    (0, 1), // O
    (2, 1), // X
    (1, 2), // O
    (1, 0), // X
    (2, 0), // O
    (2, 2), // X
];

#[test]
fn test_full_board_tie() {
    let mut engine = engine(2);
    for (r, c) in &TIE_MOVES[..8] {
        assert_eq!(engine.place_mark(*r, *c).unwrap(), RoundOutcome::InProgress);
    }
    assert_eq!(engine.current_player(), Player::X);

    let outcome = engine.place_mark(2, 2).unwrap();
    assert_eq!(outcome, RoundOutcome::Tie);
    assert_eq!(completed_lines(engine.board()), 0);
    assert_eq!(*engine.score(), ScoreRecord::default());
    assert_eq!(engine.store().saves(), 1);
    assert_eq!(
        engine.store().current().map(|f| f.result().as_str()),
        Some("It's a tie")
    );
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut engine = engine(4);
    engine.place_mark(1, 1).unwrap();
    let before = engine.board().clone();
    let to_move = engine.current_player();

    assert_eq!(engine.place_mark(1, 1).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.current_player(), to_move);
    assert_eq!(engine.moves_played(), 1);
}

#[test]
fn test_placements_after_win_are_ignored() {
    let mut engine = engine(5);
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.place_mark(r, c).unwrap();
    }
    let before = engine.board().clone();
    assert_eq!(engine.place_mark(2, 2).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.computer_move().unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.board(), &before);
    assert_eq!(*engine.score(), ScoreRecord::new(1, 0));
    assert_eq!(engine.store().saves(), 1);
}

#[test]
fn test_placements_after_tie_are_ignored() {
    let mut engine = engine(6);
    for (r, c) in TIE_MOVES {
        engine.place_mark(r, c).unwrap();
    }
    assert_eq!(engine.last_outcome(), RoundOutcome::Tie);
    assert_eq!(engine.phase(), Phase::Ended);
    let before = engine.board().clone();
    assert_eq!(engine.place_mark(0, 0).unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.computer_move().unwrap(), RoundOutcome::InProgress);
    assert_eq!(engine.store().saves(), 1);
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..200 {
        let mut engine = engine(seed);
        let mut square_rng = StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(17));
        let before = *engine.score();

        let outcome = loop {
            let empty = engine.board().empty_positions();
            let pos = *empty
                .choose(&mut square_rng)
                .expect("Round should have ended before the board filled");
            let outcome = engine.place(pos).unwrap();
            check_counts(engine.board());
            if outcome.is_over() {
                break outcome;
            }
            let outcome = engine.computer_move().unwrap();
            check_counts(engine.board());
            if outcome.is_over() {
                break outcome;
            }
        };

        match outcome {
            RoundOutcome::Win(winner) => {
                assert!(completed_lines(engine.board()) >= 1);
                let (_, owner) = engine.board().winning_line().expect("Winner without a line");
                assert_eq!(owner, winner);
                assert_eq!(engine.score().wins(winner), before.wins(winner) + 1);
                assert_eq!(
                    engine.score().wins(winner.opponent()),
                    before.wins(winner.opponent())
                );
            }
            RoundOutcome::Tie => {
                assert!(engine.board().is_full());
                assert_eq!(completed_lines(engine.board()), 0);
                assert_eq!(*engine.score(), before);
            }
            RoundOutcome::InProgress => unreachable!(),
        }
    }
}

fn check_counts(board: &Board) {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    assert!(x == o || x == o + 1, "X={} O={}", x, o);
}

#[test]
fn test_single_line_on_every_win() {
    // Wins reached by alternating play can never complete two lines of
    // different symbols; the winner owns every completed line.
    for seed in 0..200 {
        let mut engine = engine(seed);
        loop {
            let empty = engine.board().empty_positions();
            let Some(pos) = empty.first().copied() else { break };
            let mut outcome = engine.place(pos).unwrap();
            if !outcome.is_over() {
                outcome = engine.computer_move().unwrap();
            }
            if let RoundOutcome::Win(winner) = outcome {
                for line in Line::ALL {
                    if let Some(owner) = tictactoe_core::rules::check_line(engine.board(), line) {
                        assert_eq!(owner, winner);
                    }
                }
                break;
            }
            if outcome.is_over() {
                break;
            }
        }
    }
}

#[test]
fn test_reset_board_keeps_scores() {
    let mut engine = engine(7);
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.place_mark(r, c).unwrap();
    }
    engine.reset_board();

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.last_outcome(), RoundOutcome::InProgress);
    assert_eq!(*engine.score(), ScoreRecord::new(1, 0));
    assert_eq!(engine.board().get(Position::TopLeft), Square::Empty);
}

#[test]
fn test_computer_wins_are_credited_to_computer() {
    // X scatters its marks and leaves the top row open for O.
    let mut engine = engine(8);
    for (r, c) in [(1, 1), (0, 0), (2, 0), (0, 1), (1, 2)] {
        engine.place_mark(r, c).unwrap();
    }
    // Board: O O . / . X X / X . .  with O to move.
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.place_mark(0, 2).unwrap(), RoundOutcome::Win(Player::O));
    assert_eq!(*engine.score(), ScoreRecord::new(0, 1));
    assert_eq!(engine.store().load(), ScoreRecord::new(0, 1));
}

#[test]
fn test_scores_load_at_startup() {
    let mut store = MemoryStore::new();
    store.save(&ScoreRecord::new(4, 2), "Player O wins", 30).unwrap();
    let engine = GameEngine::with_rng(store, StdRng::seed_from_u64(9));
    assert_eq!(*engine.score(), ScoreRecord::new(4, 2));
}
