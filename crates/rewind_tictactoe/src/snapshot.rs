//! Immutable board snapshots recorded in the move history.

use crate::rules::{WinningLine, calculate_winner};
use crate::{Cell, Location, Position, Seat};
use serde::{Deserialize, Serialize};

/// One recorded board configuration plus its move metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Display name of whoever marked each cell.
    names: [Option<String>; 9],
    /// Where the move producing this snapshot was played.
    location: Option<Location>,
}

impl BoardSnapshot {
    /// The empty snapshot every game starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the name recorded for a position, if it was marked.
    pub fn name(&self, pos: Position) -> Option<&str> {
        self.names[pos.to_index()].as_deref()
    }

    /// Location of the move that produced this snapshot.
    ///
    /// `None` for the initial snapshot.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Number of marked cells.
    pub fn marks(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Completed line on this snapshot, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        calculate_winner(&self.cells)
    }

    /// Copies this snapshot with `seat` marking `pos`.
    ///
    /// Does not check occupancy; callers validate first.
    pub(crate) fn with_mark(&self, pos: Position, seat: Seat, name: &str) -> Self {
        let mut next = self.clone();
        let i = pos.to_index();
        next.cells[i] = Cell::Marked(seat.mark());
        next.names[i] = Some(name.to_string());
        next.location = Some(pos.location());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_snapshot() {
        let snap = BoardSnapshot::empty();
        assert_eq!(snap.marks(), 0);
        assert_eq!(snap.location(), None);
        assert!(snap.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let snap = BoardSnapshot::empty();
        let next = snap.with_mark(Position::Center, Seat::One, "One");

        assert_eq!(snap.cell(Position::Center), Cell::Empty);
        assert_eq!(next.cell(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(next.name(Position::Center), Some("One"));
        assert_eq!(next.location(), Some(Position::Center.location()));
    }

    #[test]
    fn test_with_mark_keeps_earlier_names() {
        let snap = BoardSnapshot::empty()
            .with_mark(Position::TopLeft, Seat::One, "Ada")
            .with_mark(Position::BottomRight, Seat::Two, "Grace");

        assert_eq!(snap.name(Position::TopLeft), Some("Ada"));
        assert_eq!(snap.name(Position::BottomRight), Some("Grace"));
        assert_eq!(snap.name(Position::Center), None);
        assert_eq!(snap.marks(), 2);
    }
}
