//! Tic-tac-toe with move history and time travel.
//!
//! This crate contains the game logic only. A front-end renders
//! [`BoardView`], the status line and the move list, and feeds clicks back
//! as [`Intent`]s.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, Intent};
//!
//! let mut game = GameController::new();
//! assert_eq!(game.status(), "Player One (X)");
//!
//! game.dispatch(Intent::CellClicked(0));
//! assert_eq!(game.status(), "Player Two (O)");
//!
//! game.dispatch(Intent::JumpTo(0));
//! assert_eq!(game.moves().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod position;
mod snapshot;
mod state;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use controller::GameController;
pub use error::{InvalidState, JumpError, MoveRejection};
pub use position::{Location, Position};
pub use rules::{WinningLine, calculate_winner};
pub use snapshot::BoardSnapshot;
pub use state::{GameState, MoveEntry, Phase, RESET_LABEL};
pub use types::{Cell, Mark, Roster, Seat};
pub use view::{BoardView, CELL_CLASS, CellView, Intent, WINNING_CLASS};
