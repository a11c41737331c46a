//! Game rules for tic-tac-toe.
//!
//! Pure functions over a snapshot's cells. Rules are kept apart from
//! history bookkeeping so views and invariants can share them.

pub mod win;

pub use win::{LINES, WinningLine, calculate_winner};
