//! Win detection logic for tic-tac-toe.

use crate::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in priority order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The mark filling the line.
    pub mark: Mark,
    /// The three positions, in line order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Returns the first completed line on the board, if any.
///
/// When several lines are complete the earliest in [`LINES`] wins.
#[instrument(skip(cells))]
pub fn calculate_winner(cells: &[Cell; 9]) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|pos| cells[pos.to_index()]);
        match a {
            Cell::Marked(mark) if a == b && a == c => Some(WinningLine { mark, line }),
            _ => None,
        }
    })
}
