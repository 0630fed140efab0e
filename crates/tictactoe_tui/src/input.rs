//! Keyboard and mouse mapping for the board.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor to another square.
    Cursor(Position),
    /// Place a mark at the given square.
    Place(Position),
    /// Zero the scores and start over.
    Restart,
    /// Leave the game.
    Quit,
    /// Nothing to do.
    None,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a key press given the current cursor.
pub fn command_for_key(cursor: Position, key: KeyCode) -> Command {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Command::Place(cursor),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_key(c).map_or(Command::None, Command::Place)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}

/// Finds the square drawn under terminal cell `(x, y)`.
pub fn square_at(areas: &[Rect; 9], x: u16, y: u16) -> Option<Position> {
    areas
        .iter()
        .position(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            command_for_key(Position::Center, KeyCode::Enter),
            Command::Place(Position::Center)
        );
        assert_eq!(
            command_for_key(Position::Center, KeyCode::Char('7')),
            Command::Place(Position::BottomLeft)
        );
        assert_eq!(command_for_key(Position::Center, KeyCode::Char('0')), Command::None);
        assert_eq!(command_for_key(Position::Center, KeyCode::Char('r')), Command::Restart);
        assert_eq!(command_for_key(Position::Center, KeyCode::Esc), Command::Quit);
    }

    #[test]
    fn test_square_at() {
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let i = i as u16;
            *area = Rect::new((i % 3) * 10, (i / 3) * 4, 9, 3);
        }
        assert_eq!(square_at(&areas, 0, 0), Some(Position::TopLeft));
        assert_eq!(square_at(&areas, 15, 5), Some(Position::Center));
        assert_eq!(square_at(&areas, 9, 0), None);
        assert_eq!(square_at(&areas, 28, 10), Some(Position::BottomRight));
    }
}
