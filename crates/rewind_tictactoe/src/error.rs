//! Reasons a transition was not applied.

use crate::Position;
use derive_more::{Display, Error};

/// Why a move was ignored.
///
/// Rejected moves are no-ops in play; this type exists so callers can log
/// or display the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The displayed snapshot already has a winner.
    #[display("Game is already won")]
    GameWon,

    /// The target cell is taken.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// Index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot jump to step {requested}: history has {history_len} entries")]
pub struct JumpError {
    /// Step that was asked for.
    pub requested: usize,
    /// Length of the history at the time.
    pub history_len: usize,
}

/// A decoded game state whose history cannot be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid game state: step {step} with {history_len} history entries")]
pub struct InvalidState {
    /// Decoded step.
    pub step: usize,
    /// Decoded history length.
    pub history_len: usize,
}
