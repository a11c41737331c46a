//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Intent, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a click to the game.
    Game(Intent),
    /// Move the board cursor.
    Cursor(Position),
    /// Start a fresh game.
    Restart,
    /// Leave the app.
    Quit,
    /// Nothing to do.
    None,
}

/// Translates a key into an action.
///
/// `step` is the displayed history step, used for stepping back and forth.
pub fn action_for_key(key: KeyCode, cursor: Position, step: usize) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => {
            Action::Game(Intent::CellClicked(cursor.to_index()))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Action::Game(Intent::CellClicked(index))
        }
        KeyCode::Char('[') if step > 0 => Action::Game(Intent::JumpTo(step - 1)),
        KeyCode::Char(']') => Action::Game(Intent::JumpTo(step + 1)),
        KeyCode::Home => Action::Game(Intent::JumpTo(0)),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Down),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::BottomCenter, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digits_click_cells() {
        assert_eq!(
            action_for_key(KeyCode::Char('1'), Position::Center, 0),
            Action::Game(Intent::CellClicked(0))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('9'), Position::Center, 0),
            Action::Game(Intent::CellClicked(8))
        );
    }

    #[test]
    fn test_enter_clicks_cursor() {
        assert_eq!(
            action_for_key(KeyCode::Enter, Position::BottomLeft, 0),
            Action::Game(Intent::CellClicked(6))
        );
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            action_for_key(KeyCode::Char('['), Position::Center, 3),
            Action::Game(Intent::JumpTo(2))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('['), Position::Center, 0),
            Action::None
        );
        assert_eq!(
            action_for_key(KeyCode::Char(']'), Position::Center, 3),
            Action::Game(Intent::JumpTo(4))
        );
        assert_eq!(
            action_for_key(KeyCode::Home, Position::Center, 5),
            Action::Game(Intent::JumpTo(0))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            action_for_key(KeyCode::Char('q'), Position::Center, 0),
            Action::Quit
        );
        assert_eq!(
            action_for_key(KeyCode::Esc, Position::Center, 0),
            Action::Quit
        );
        assert_eq!(
            action_for_key(KeyCode::Char('n'), Position::Center, 0),
            Action::Restart
        );
        assert_eq!(
            action_for_key(KeyCode::Char('x'), Position::Center, 0),
            Action::None
        );
    }
}
