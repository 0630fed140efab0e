//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use derive_more::Display;
use tracing::instrument;

/// One of the eight winning triples.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Top row.
    #[display("top row")]
    TopRow,
    /// Middle row.
    #[display("middle row")]
    MiddleRow,
    /// Bottom row.
    #[display("bottom row")]
    BottomRow,
    /// Left column.
    #[display("left column")]
    LeftColumn,
    /// Center column.
    #[display("center column")]
    CenterColumn,
    /// Right column.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines in check order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }
}

/// Returns the owner of `line` if all three squares hold the same mark.
pub fn check_line(board: &Board, line: Line) -> Option<Player> {
    let [a, b, c] = line.positions();
    match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player) =>
        {
            Some(player)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    board.winner()
}
