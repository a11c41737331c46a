//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (placed by the first seat).
    #[display("X")]
    X,
    /// Mark O (placed by the second seat).
    #[display("O")]
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell carrying a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Text shown for this cell: blank, "X" or "O".
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Marked(Mark::X) => "X",
            Cell::Marked(Mark::O) => "O",
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First to move, plays X.
    One,
    /// Second to move, plays O.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The mark this seat places.
    pub fn mark(self) -> Mark {
        match self {
            Seat::One => Mark::X,
            Seat::Two => Mark::O,
        }
    }

    /// Seat whose turn it is at the given step, by parity alone.
    ///
    /// Only valid while marks strictly alternate starting with seat one.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Seat::One } else { Seat::Two }
    }
}

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Roster {
    /// Name of seat one.
    one: String,
    /// Name of seat two.
    two: String,
}

impl Roster {
    /// Creates a roster from two display names.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
        }
    }

    /// Returns the display name of a seat.
    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::One => &self.one,
            Seat::Two => &self.two,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("One", "Two")
    }
}
