//! Board positions and move locations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[strum(serialize = "Center")]
    Center,
    /// Middle-right (position 5)
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row and column of this position, both 1-based.
    pub fn location(self) -> Location {
        let index = self.to_index();
        Location {
            row: index / 3 + 1,
            column: index % 3 + 1,
        }
    }
}

/// Human-readable location of a move, 1-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_getters::Getters,
)]
#[display("[row: {row} | column: {column}]")]
pub struct Location {
    /// Row, 1 to 3.
    row: usize,
    /// Column, 1 to 3.
    column: usize,
}
